//! Action Dispatcher
//!
//! Every user interaction becomes one `Action`: one network call, then a reload.

use leptos::prelude::GetUntracked;

use crate::commands::{self, ApiError, CreateTodoArgs};
use crate::context::AppContext;
use crate::models::Todo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create { text: String, parent_id: Option<u32> },
    SetMark { id: u32, mark: bool },
    Delete { id: u32 },
}

impl Action {
    /// Flip the completion flag of `todo`
    pub fn toggle(todo: &Todo) -> Self {
        Action::SetMark {
            id: todo.id,
            mark: !todo.mark,
        }
    }

    /// Reject input the server would refuse; create text is trimmed
    pub fn validate(self) -> Result<Self, ApiError> {
        match self {
            Action::Create { text, parent_id } => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(ApiError::InvalidInput("text must not be empty".to_string()));
                }
                Ok(Action::Create {
                    text: text.to_string(),
                    parent_id,
                })
            }
            other => Ok(other),
        }
    }
}

/// Validate and send a single action
pub async fn dispatch(action: Action) -> Result<(), ApiError> {
    match action.validate()? {
        Action::Create { text, parent_id } => {
            commands::create_todo(&CreateTodoArgs { text: &text, parent_id }).await?;
        }
        Action::SetMark { id, mark } => commands::mark_todo(id, mark).await?,
        Action::Delete { id } => commands::delete_todo(id).await?,
    }
    Ok(())
}

/// Dispatch, surface any error, then reload regardless of outcome.
///
/// Deleting the add-under target clears it right away; descendants of a
/// deleted item are dropped when the reload lands.
///
/// Returns whether the action succeeded.
pub async fn perform(ctx: AppContext, action: Action) -> bool {
    log::debug!("[ACTION] {:?}", action);
    let deleted = match action {
        Action::Delete { id } => Some(id),
        _ => None,
    };
    let result = dispatch(action).await;
    match &result {
        Ok(()) if deleted.is_some() && deleted == ctx.adding_under.get_untracked() => {
            ctx.set_adding_under(None);
        }
        Ok(()) => {}
        Err(e) => ctx.report_error(e),
    }
    ctx.reload();
    result.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(mark: bool) -> Todo {
        Todo { id: 4, text: "Milk".into(), mark, parent_id: None }
    }

    #[test]
    fn test_toggle_flips_mark() {
        assert_eq!(Action::toggle(&todo(false)), Action::SetMark { id: 4, mark: true });
        assert_eq!(Action::toggle(&todo(true)), Action::SetMark { id: 4, mark: false });
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let original = todo(false);
        let Action::SetMark { mark, .. } = Action::toggle(&original) else { unreachable!() };
        let once = Todo { mark, ..original.clone() };
        let Action::SetMark { mark, .. } = Action::toggle(&once) else { unreachable!() };
        assert_eq!(mark, original.mark);
    }

    #[test]
    fn test_validate_trims_create_text() {
        let action = Action::Create { text: "  Milk \n".into(), parent_id: Some(1) };
        assert_eq!(
            action.validate(),
            Ok(Action::Create { text: "Milk".into(), parent_id: Some(1) })
        );
    }

    #[test]
    fn test_validate_rejects_blank_text() {
        let action = Action::Create { text: " \t ".into(), parent_id: None };
        assert!(matches!(action.validate(), Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_passes_other_actions() {
        assert_eq!(Action::Delete { id: 1 }.validate(), Ok(Action::Delete { id: 1 }));
    }

    #[test]
    fn test_failed_action_still_reloads() {
        let owner = leptos::prelude::Owner::new();
        owner.set();
        let ctx = AppContext::new();

        let ok = futures::executor::block_on(perform(
            ctx,
            Action::Create { text: " ".into(), parent_id: None },
        ));

        assert!(!ok);
        assert_eq!(ctx.reload_trigger.get_untracked(), 1);
        assert!(ctx.last_error.get_untracked().is_some());
    }
}
