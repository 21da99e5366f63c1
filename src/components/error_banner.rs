//! Error Banner Component
//!
//! Shows the last API failure until dismissed or until it times out.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

const AUTO_DISMISS_MS: u32 = 5_000;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();

    // Clear each error after a delay, unless another was reported since
    Effect::new(move |_| {
        let seq = ctx.error_seq.get();
        if ctx.last_error.get_untracked().is_some() {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                ctx.clear_error_if(seq);
            });
        }
    });

    view! {
        {move || ctx.last_error.get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-text">{message}</span>
                <button class="dismiss-btn" on:click=move |_| ctx.clear_error()>"×"</button>
            </div>
        })}
    }
}
