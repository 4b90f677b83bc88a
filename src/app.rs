//! Receipt Form App
//!
//! Top-level controller: owns the store, restores the saved draft on
//! load, and wires the save/reset/autosave transitions to storage.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    DeliverySection, FormActions, ItemsTable, NotesSection, ReceiverSection,
    SenderSection, SignatureSection, ToastHost,
};
use crate::context::{FormContext, ToastMessage};
use crate::storage::{DraftRepository, LocalStorageBackend, SaveOutcome};
use crate::store::{FormState, FormStateStoreFields, FormStore};

/// Delay between background snapshots of the form.
const AUTOSAVE_INTERVAL_MS: u32 = 5_000;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store: FormStore = Store::new(FormState::default());
    let (toast, set_toast) = signal::<Option<ToastMessage>>(None);
    let (focus_row, set_focus_row) = signal::<Option<u32>>(None);
    let ctx = FormContext::new((toast, set_toast), (focus_row, set_focus_row));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Header plus one blank row before anything renders.
    store.rows().write().add_header_row();
    let first = store.rows().write().add_item_row();
    ctx.request_focus(first);

    // Restore any saved draft once the page is up. A draft that fails to
    // load is logged and treated as absent; the blank form stays usable.
    Effect::new(move |_| {
        let repo = DraftRepository::new(LocalStorageBackend::new());
        match repo.load() {
            Ok(Some(draft)) => {
                web_sys::console::log_1(
                    &format!("[FORM] restoring draft with {} item(s)", draft.items.len()).into(),
                );
                store.write().apply_draft(&draft);
                if let Some(last) = store.rows().read_untracked().last_item_id() {
                    ctx.request_focus(last);
                }
            }
            Ok(None) => {}
            Err(err) => {
                web_sys::console::error_1(&format!("[FORM] restore skipped: {}", err).into());
            }
        }
    });

    // Shared by the explicit save controls and the autosave timer. The
    // backend is resolved per call, the same way the handlers would hit the
    // store directly; only the explicit path reports success to the user.
    let save_draft = move |notify: bool| {
        let repo = DraftRepository::new(LocalStorageBackend::new());
        let draft = store.read_untracked().to_draft();
        match repo.persist(&draft) {
            Ok(SaveOutcome::Saved) | Ok(SaveOutcome::Cleared) => {
                if notify {
                    ctx.notify("تم حفظ النموذج بنجاح!");
                }
            }
            Err(err) => {
                web_sys::console::error_1(&format!("[FORM] save failed: {}", err).into());
                ctx.notify_error("حدث خطأ أثناء حفظ البيانات");
            }
        }
    };

    // Enter inside a field still submits the form; the form is marked
    // novalidate so this path saves whether or not every row is filled.
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        save_draft(true);
    };

    // Background snapshot for the lifetime of the page.
    Interval::new(AUTOSAVE_INTERVAL_MS, move || save_draft(false)).forget();

    let on_reset = move |_: ()| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(
                    "هل أنت متأكد من إعادة تعيين النموذج؟ سيتم حذف جميع البيانات المدخلة.",
                )
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let fresh = store.write().reset();
        ctx.request_focus(fresh);

        let repo = DraftRepository::new(LocalStorageBackend::new());
        match repo.clear() {
            Ok(()) => ctx.notify("تم إعادة تعيين النموذج بنجاح"),
            Err(err) => {
                web_sys::console::error_1(&format!("[FORM] reset failed: {}", err).into());
                ctx.notify_error("حدث خطأ أثناء إعادة تعيين النموذج");
            }
        }
    };

    view! {
        <div class="app-container" dir="rtl" lang="ar">
            <header class="page-header">
                <h1>"سند تسليم واستلام"</h1>
            </header>

            <form id="receiptForm" class="receipt-form" novalidate=true on:submit=on_submit>
                <SenderSection />
                <ReceiverSection />
                <DeliverySection />
                <ItemsTable />
                <NotesSection />
                <SignatureSection />
                <FormActions on_save=move |_: ()| save_draft(true) on_reset=on_reset />
            </form>

            <ToastHost />
        </div>
    }
}
