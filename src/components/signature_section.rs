//! Signature Section
//!
//! Recipient and supplier signature lines at the bottom of the printed
//! document. Like the rest of the form these persist with the draft.

use leptos::prelude::*;

use crate::store::{use_form_store, FormStateStoreFields};

#[component]
pub fn SignatureSection() -> impl IntoView {
    let store = use_form_store();

    view! {
        <section class="form-section signatures-section">
            <h2>"التواقيع"</h2>
            <div class="signatures-grid">
                <div class="signature-block">
                    <h3>"توقيع المستلم"</h3>
                    <div class="form-group">
                        <label for="recipientSignName">"الاسم"</label>
                        <input
                            type="text"
                            id="recipientSignName"
                            name="recipientSignName"
                            class="form-control"
                            prop:value=move || store.signatures().read().recipient.name.clone()
                            on:input=move |ev| {
                                store.signatures().write().recipient.name = event_target_value(&ev);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="recipientSignDate">"التاريخ"</label>
                        <input
                            type="date"
                            id="recipientSignDate"
                            name="recipientSignDate"
                            class="form-control"
                            prop:value=move || store.signatures().read().recipient.date.clone()
                            on:input=move |ev| {
                                store.signatures().write().recipient.date = event_target_value(&ev);
                            }
                        />
                    </div>
                </div>
                <div class="signature-block">
                    <h3>"توقيع المورد"</h3>
                    <div class="form-group">
                        <label for="supplierSignName">"الاسم"</label>
                        <input
                            type="text"
                            id="supplierSignName"
                            name="supplierSignName"
                            class="form-control"
                            prop:value=move || store.signatures().read().supplier.name.clone()
                            on:input=move |ev| {
                                store.signatures().write().supplier.name = event_target_value(&ev);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="supplierSignDate">"التاريخ"</label>
                        <input
                            type="date"
                            id="supplierSignDate"
                            name="supplierSignDate"
                            class="form-control"
                            prop:value=move || store.signatures().read().supplier.date.clone()
                            on:input=move |ev| {
                                store.signatures().write().supplier.date = event_target_value(&ev);
                            }
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
