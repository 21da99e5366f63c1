//! Todo Commands
//!
//! One function per server endpoint.

use serde::Serialize;
use crate::models::Todo;
use super::{api_url, check, ApiError};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateTodoArgs<'a> {
    pub text: &'a str,
    pub parent_id: Option<u32>,
}

#[derive(Serialize)]
struct MarkArgs {
    mark: bool,
}

// ========================
// Commands
// ========================

pub async fn list_todos() -> Result<Vec<Todo>, ApiError> {
    let resp = reqwest::Client::new().get(api_url("/todos")).send().await?;
    Ok(check(resp).await?.json().await?)
}

pub async fn create_todo(args: &CreateTodoArgs<'_>) -> Result<Todo, ApiError> {
    let resp = reqwest::Client::new()
        .post(api_url("/todos"))
        .json(args)
        .send()
        .await?;
    Ok(check(resp).await?.json().await?)
}

pub async fn mark_todo(id: u32, mark: bool) -> Result<(), ApiError> {
    let resp = reqwest::Client::new()
        .post(api_url(&format!("/todos/{}/mark", id)))
        .json(&MarkArgs { mark })
        .send()
        .await?;
    check(resp).await?;
    Ok(())
}

pub async fn delete_todo(id: u32) -> Result<(), ApiError> {
    let resp = reqwest::Client::new()
        .delete(api_url(&format!("/todos/{}", id)))
        .send()
        .await?;
    check(resp).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_args_wire_shape() {
        let json = serde_json::to_value(CreateTodoArgs { text: "Milk", parent_id: None }).unwrap();
        assert_eq!(json, serde_json::json!({"text": "Milk", "parent_id": null}));
    }

    #[test]
    fn test_mark_args_wire_shape() {
        let json = serde_json::to_value(MarkArgs { mark: true }).unwrap();
        assert_eq!(json, serde_json::json!({"mark": true}));
    }
}
