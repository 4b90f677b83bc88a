//! Item Row Component
//!
//! One editable product row: description, quantity, condition select,
//! notes and the remove button. Rendered inside the keyed row list, so
//! the component is created once per id and the inputs patch in place.

use leptos::prelude::*;

use crate::models::ItemCondition;
use crate::store::{use_form_store, FormStateStoreFields};

#[component]
pub fn ItemRowView(id: u32) -> impl IntoView {
    let store = use_form_store();

    let description = move || {
        store
            .rows()
            .read()
            .row(id)
            .map(|row| row.description.clone())
            .unwrap_or_default()
    };
    let quantity = move || {
        store
            .rows()
            .read()
            .row(id)
            .map(|row| row.quantity.clone())
            .unwrap_or_default()
    };
    let condition = move || {
        store
            .rows()
            .read()
            .row(id)
            .map(|row| row.condition.clone())
            .unwrap_or_default()
    };
    let notes = move || {
        store
            .rows()
            .read()
            .row(id)
            .map(|row| row.notes.clone())
            .unwrap_or_default()
    };

    let remove = move |_| {
        store.rows().write().remove_item_row(id);
    };

    view! {
        <div class="item-row">
            <div class="item-field" data-label="وصف المنتج">
                <input
                    type="text"
                    id=format!("item-desc-{}", id)
                    name=format!("items[{}][description]", id)
                    class="form-control"
                    placeholder="أدخل وصف المنتج"
                    required=true
                    prop:value=description
                    on:input=move |ev| store.rows().write().set_description(id, &event_target_value(&ev))
                />
            </div>
            <div class="item-field" data-label="الكمية">
                <input
                    type="number"
                    id=format!("item-qty-{}", id)
                    name=format!("items[{}][quantity]", id)
                    class="form-control"
                    min="1"
                    required=true
                    prop:value=quantity
                    on:input=move |ev| store.rows().write().set_quantity(id, &event_target_value(&ev))
                />
            </div>
            <div class="item-field" data-label="الحالة">
                <select
                    id=format!("item-condition-{}", id)
                    name=format!("items[{}][condition]", id)
                    class="form-control"
                    required=true
                    prop:value=condition
                    on:change=move |ev| store.rows().write().set_condition(id, &event_target_value(&ev))
                >
                    {ItemCondition::ALL
                        .iter()
                        .map(|choice| {
                            let value = choice.as_str();
                            view! { <option value=value>{value}</option> }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="item-field" data-label="ملاحظات">
                <input
                    type="text"
                    id=format!("item-notes-{}", id)
                    name=format!("items[{}][notes]", id)
                    class="form-control"
                    placeholder="ملاحظات إضافية"
                    prop:value=notes
                    on:input=move |ev| store.rows().write().set_notes(id, &event_target_value(&ev))
                />
            </div>
            <div class="item-actions" data-label="إجراءات">
                <button
                    type="button"
                    class="btn btn-danger remove-item"
                    title="حذف المنتج"
                    on:click=remove
                >
                    "حذف"
                </button>
            </div>
        </div>
    }
}
