//! Leptos PrintGuard
//!
//! Re-entrancy guard around the browser print dialog. Taking the guard
//! detaches the caller's print trigger until the platform reports
//! `afterprint`, or until a fallback timer expires on platforms that
//! never send it. Rapid repeated clicks open at most one dialog.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Delay before the dialog opens, letting the click's own event turn
/// finish rendering first.
const PRINT_DISPATCH_DELAY_MS: u32 = 100;

/// Fallback release delay for platforms that never fire `afterprint`.
const PRINT_FALLBACK_MS: u32 = 3_000;

/// Guard phases. `Printing` covers the whole window from the accepted
/// request until the release signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrintPhase {
    #[default]
    Idle,
    Printing,
}

impl PrintPhase {
    /// Try to take the guard. Returns true when the caller may print;
    /// a request made while printing is refused and changes nothing.
    pub fn begin(&mut self) -> bool {
        match self {
            PrintPhase::Idle => {
                *self = PrintPhase::Printing;
                true
            }
            PrintPhase::Printing => false,
        }
    }

    /// Release the guard. Idempotent, so a late `afterprint` arriving
    /// after the fallback timer already released is a no-op.
    pub fn settle(&mut self) {
        *self = PrintPhase::Idle;
    }

    pub fn is_printing(&self) -> bool {
        matches!(self, PrintPhase::Printing)
    }
}

/// Guard state as a signal pair, shared between the trigger button and
/// the release callbacks.
#[derive(Clone, Copy)]
pub struct PrintSignals {
    pub phase: ReadSignal<PrintPhase>,
    set_phase: WriteSignal<PrintPhase>,
}

pub fn create_print_signals() -> PrintSignals {
    let (phase, set_phase) = signal(PrintPhase::default());
    PrintSignals { phase, set_phase }
}

/// Take the guard through the signal pair. Returns false while a print
/// is already in flight.
pub fn try_begin(signals: &PrintSignals) -> bool {
    let mut phase = signals.phase.get_untracked();
    let granted = phase.begin();
    if granted {
        signals.set_phase.set(phase);
    }
    granted
}

/// Release the guard through the signal pair.
pub fn settle(signals: &PrintSignals) {
    signals.set_phase.set(PrintPhase::Idle);
}

/// Open the print dialog after a short delay and release the guard when
/// the platform reports completion.
///
/// Call only after `try_begin` granted the guard. Release runs on the
/// first of: the window's `afterprint` event (listened for once), or the
/// fallback timer. The event path cancels the timer so the two never
/// race; a leftover signal from either path lands on the idempotent
/// release and does nothing.
pub fn schedule_print(signals: PrintSignals) {
    let fallback: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let fallback_for_event = Rc::clone(&fallback);
    let after_print = Closure::<dyn FnMut()>::new(move || {
        if let Some(timer) = fallback_for_event.borrow_mut().take() {
            timer.cancel();
        }
        settle(&signals);
    });
    if let Some(win) = web_sys::window() {
        let options = web_sys::AddEventListenerOptions::new();
        options.set_once(true);
        let _ = win.add_event_listener_with_callback_and_add_event_listener_options(
            "afterprint",
            after_print.as_ref().unchecked_ref(),
            &options,
        );
    }
    // Listener lives until it fires; the page holds it for its lifetime.
    after_print.forget();

    *fallback.borrow_mut() = Some(Timeout::new(PRINT_FALLBACK_MS, move || {
        settle(&signals);
    }));

    let fallback_for_error = Rc::clone(&fallback);
    Timeout::new(PRINT_DISPATCH_DELAY_MS, move || {
        if let Some(win) = web_sys::window() {
            if let Err(err) = win.print() {
                web_sys::console::error_1(
                    &format!("[PRINT] dialog failed to open: {:?}", err).into(),
                );
                if let Some(timer) = fallback_for_error.borrow_mut().take() {
                    timer.cancel();
                }
                settle(&signals);
            }
        }
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_refuses_while_printing() {
        let mut phase = PrintPhase::default();
        assert!(phase.begin());
        assert!(phase.is_printing());

        // A second request inside the printing window is refused.
        assert!(!phase.begin());
        assert!(phase.is_printing());
    }

    #[test]
    fn test_settle_reopens_the_guard() {
        let mut phase = PrintPhase::default();
        assert!(phase.begin());
        phase.settle();
        assert!(!phase.is_printing());
        assert!(phase.begin());
    }

    #[test]
    fn test_settle_is_idempotent() {
        let mut phase = PrintPhase::default();
        assert!(phase.begin());

        // Fallback timer and a late afterprint both release; the second
        // release must change nothing.
        phase.settle();
        phase.settle();
        assert_eq!(phase, PrintPhase::Idle);
        assert!(phase.begin());
    }
}
