//! Details Sections
//!
//! Sender, receiver and delivery blocks at the top of the form. Every
//! input is bound both ways to the store, so the snapshot never has to
//! read the DOM.

use leptos::prelude::*;

use crate::store::{use_form_store, FormStateStoreFields};

/// Supplier name and phone
#[component]
pub fn SenderSection() -> impl IntoView {
    let store = use_form_store();

    view! {
        <section class="form-section">
            <h2>"بيانات المورد"</h2>
            <div class="form-grid">
                <div class="form-group">
                    <label for="supplierName">"اسم المورد"</label>
                    <input
                        type="text"
                        id="supplierName"
                        name="supplierName"
                        class="form-control"
                        prop:value=move || store.sender().read().name.clone()
                        on:input=move |ev| store.sender().write().name = event_target_value(&ev)
                    />
                </div>
                <div class="form-group">
                    <label for="supplierPhone">"رقم الهاتف"</label>
                    <input
                        type="tel"
                        id="supplierPhone"
                        name="supplierPhone"
                        class="form-control"
                        prop:value=move || store.sender().read().location.clone()
                        on:input=move |ev| store.sender().write().location = event_target_value(&ev)
                    />
                </div>
            </div>
        </section>
    }
}

/// Receiver name and department
#[component]
pub fn ReceiverSection() -> impl IntoView {
    let store = use_form_store();

    view! {
        <section class="form-section">
            <h2>"بيانات المستلم"</h2>
            <div class="form-grid">
                <div class="form-group">
                    <label for="receiverName">"اسم المستلم"</label>
                    <input
                        type="text"
                        id="receiverName"
                        name="receiverName"
                        class="form-control"
                        prop:value=move || store.receiver().read().name.clone()
                        on:input=move |ev| store.receiver().write().name = event_target_value(&ev)
                    />
                </div>
                <div class="form-group">
                    <label for="receiverDepartment">"القسم"</label>
                    <input
                        type="text"
                        id="receiverDepartment"
                        name="receiverDepartment"
                        class="form-control"
                        prop:value=move || store.receiver().read().department.clone()
                        on:input=move |ev| store.receiver().write().department = event_target_value(&ev)
                    />
                </div>
            </div>
        </section>
    }
}

/// Delivery location, date and time
#[component]
pub fn DeliverySection() -> impl IntoView {
    let store = use_form_store();

    view! {
        <section class="form-section">
            <h2>"بيانات التسليم"</h2>
            <div class="form-grid">
                <div class="form-group">
                    <label for="deliveryLocation">"مكان التسليم"</label>
                    <input
                        type="text"
                        id="deliveryLocation"
                        name="deliveryLocation"
                        class="form-control"
                        prop:value=move || store.delivery().read().location.clone()
                        on:input=move |ev| store.delivery().write().location = event_target_value(&ev)
                    />
                </div>
                <div class="form-group">
                    <label for="deliveryDate">"تاريخ التسليم"</label>
                    <input
                        type="date"
                        id="deliveryDate"
                        name="deliveryDate"
                        class="form-control"
                        prop:value=move || store.delivery().read().date.clone()
                        on:input=move |ev| store.delivery().write().date = event_target_value(&ev)
                    />
                </div>
                <div class="form-group">
                    <label for="deliveryTime">"وقت التسليم"</label>
                    <input
                        type="time"
                        id="deliveryTime"
                        name="deliveryTime"
                        class="form-control"
                        prop:value=move || store.delivery().read().time.clone()
                        on:input=move |ev| store.delivery().write().time = event_target_value(&ev)
                    />
                </div>
            </div>
        </section>
    }
}
