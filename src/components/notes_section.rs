//! Notes Section
//!
//! Free-text notes area under the products table.

use leptos::prelude::*;

use crate::store::{use_form_store, FormStateStoreFields};

#[component]
pub fn NotesSection() -> impl IntoView {
    let store = use_form_store();

    view! {
        <section class="form-section">
            <h2>"ملاحظات إضافية"</h2>
            <div class="form-group">
                <textarea
                    id="additionalNotes"
                    name="additionalNotes"
                    class="form-control"
                    rows="3"
                    placeholder="أي ملاحظات أخرى حول التسليم"
                    prop:value=move || store.notes().get()
                    on:input=move |ev| store.notes().set(event_target_value(&ev))
                ></textarea>
            </div>
        </section>
    }
}
