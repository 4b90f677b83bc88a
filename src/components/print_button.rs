//! Print Button Component
//!
//! Trigger for the guarded print flow. While a print is in flight the
//! live button is structurally swapped for a disabled placeholder, so a
//! queued second click has no handler to land on.

use leptos::prelude::*;
use leptos_printguard::{create_print_signals, schedule_print, try_begin};

#[component]
pub fn PrintButton() -> impl IntoView {
    let print = create_print_signals();

    let request_print = move |_| {
        if try_begin(&print) {
            schedule_print(print);
        }
    };

    view! {
        <Show when=move || !print.phase.get().is_printing()>
            <button
                type="button"
                id="printForm"
                class="btn btn-print"
                on:click=request_print
            >
                "طباعة"
            </button>
        </Show>
        <Show when=move || print.phase.get().is_printing()>
            <button type="button" class="btn btn-print" disabled=true>
                "جارٍ الطباعة..."
            </button>
        </Show>
    }
}
