//! Form Actions Component
//!
//! Save, reset and print buttons under the form. Save and reset go
//! through the callbacks the controller wires up. Save is a plain
//! button, not a submit control: a blank row never blocks it.

use leptos::prelude::*;

use crate::components::PrintButton;

#[component]
pub fn FormActions(
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form-actions">
            <button
                type="button"
                id="saveForm"
                class="btn btn-save"
                on:click=move |_| on_save.run(())
            >
                "حفظ"
            </button>
            <button
                type="button"
                id="resetForm"
                class="btn btn-reset"
                on:click=move |_| on_reset.run(())
            >
                "إعادة تعيين"
            </button>
            <PrintButton />
        </div>
    }
}
