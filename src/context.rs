//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

/// A transient notification shown near the bottom of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub text: String,
    pub is_error: bool,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct FormContext {
    /// Current toast, `None` when hidden - read
    pub toast: ReadSignal<Option<ToastMessage>>,
    /// Current toast - write
    set_toast: WriteSignal<Option<ToastMessage>>,
    /// Row whose description input should grab focus - read
    pub focus_row: ReadSignal<Option<u32>>,
    /// Row whose description input should grab focus - write
    set_focus_row: WriteSignal<Option<u32>>,
}

impl FormContext {
    pub fn new(
        toast: (
            ReadSignal<Option<ToastMessage>>,
            WriteSignal<Option<ToastMessage>>,
        ),
        focus_row: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>),
    ) -> Self {
        Self {
            toast: toast.0,
            set_toast: toast.1,
            focus_row: focus_row.0,
            set_focus_row: focus_row.1,
        }
    }

    /// Show a success toast
    pub fn notify(&self, text: &str) {
        self.set_toast.set(Some(ToastMessage {
            text: text.to_string(),
            is_error: false,
        }));
    }

    /// Show an error toast
    pub fn notify_error(&self, text: &str) {
        self.set_toast.set(Some(ToastMessage {
            text: text.to_string(),
            is_error: true,
        }));
    }

    /// Hide the current toast
    pub fn dismiss_toast(&self) {
        self.set_toast.set(None);
    }

    /// Ask the items table to focus a row's description input
    pub fn request_focus(&self, id: u32) {
        self.set_focus_row.set(Some(id));
    }

    /// Mark the pending focus request as handled
    pub fn clear_focus(&self) {
        self.set_focus_row.set(None);
    }
}
