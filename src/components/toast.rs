//! Toast Component
//!
//! Renders the current toast from context and auto-dismisses it after a
//! short delay. A newer toast restarts the timer; the close button ends
//! it early.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::FormContext;

/// How long a toast stays on screen.
const TOAST_DISMISS_MS: u32 = 2_000;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<FormContext>().expect("FormContext should be provided");

    // Dropping the previous handle cancels its timer, so replacing a
    // visible toast restarts the countdown instead of stacking timers.
    let mut pending: Option<Timeout> = None;
    Effect::new(move |_| {
        if let Some(timer) = pending.take() {
            timer.cancel();
        }
        if ctx.toast.get().is_some() {
            pending = Some(Timeout::new(TOAST_DISMISS_MS, move || ctx.dismiss_toast()));
        }
    });

    view! {
        <div class="toast-container" id="toastContainer">
            {move || {
                ctx.toast.get().map(|toast| {
                    let class = if toast.is_error { "toast toast-error show" } else { "toast show" };
                    view! {
                        <div class=class>
                            <span class="toast-message">{toast.text}</span>
                            <button
                                type="button"
                                class="toast-close"
                                title="إغلاق"
                                on:click=move |_| ctx.dismiss_toast()
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
            }}
        </div>
    }
}
