//! Items Table Component
//!
//! The products list: column-label header, the keyed row list and the
//! add button. Also owns the focus effect that moves the cursor into a
//! freshly added row's description input.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::ItemRowView;
use crate::context::FormContext;
use crate::store::{use_form_store, FormStateStoreFields};

#[component]
pub fn ItemsTable() -> impl IntoView {
    let store = use_form_store();
    let ctx = use_context::<FormContext>().expect("FormContext should be provided");

    // Focus lookups wait one timer tick so a freshly added row is in the
    // DOM first. A missing target is logged and skipped; nothing else is
    // interrupted.
    Effect::new(move |_| {
        if let Some(id) = ctx.focus_row.get() {
            Timeout::new(0, move || focus_description(id)).forget();
            ctx.clear_focus();
        }
    });

    let add_item = move |_| {
        let id = store.rows().write().add_item_row();
        ctx.request_focus(id);
    };

    view! {
        <section class="form-section items-section">
            <h2>"قائمة المنتجات"</h2>
            <div class="items-list" id="itemsList">
                <Show when=move || store.rows().read().has_header()>
                    <div class="item-row header-row">
                        <div class="item-field"><div class="field-label">"وصف المنتج"</div></div>
                        <div class="item-field"><div class="field-label">"الكمية"</div></div>
                        <div class="item-field"><div class="field-label">"الحالة"</div></div>
                        <div class="item-field"><div class="field-label">"ملاحظات"</div></div>
                        <div class="item-actions"><div class="field-label">"إجراءات"</div></div>
                    </div>
                </Show>
                <For
                    each=move || store.rows().read().item_ids()
                    key=|id| *id
                    children=move |id| view! { <ItemRowView id=id /> }
                />
            </div>
            <button type="button" id="addItemBtn" class="btn btn-add" on:click=add_item>
                "+ إضافة منتج"
            </button>
        </section>
    }
}

/// Move input focus to a row's description field.
fn focus_description(id: u32) {
    let element = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(&format!("item-desc-{}", id)));
    match element.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
        Some(el) => {
            let _ = el.focus();
        }
        None => {
            web_sys::console::warn_1(
                &format!("[FORM] focus target not found: item-desc-{}", id).into(),
            );
        }
    }
}
