//! Create/edit customer form.
//!
//! Field validation runs fully client-side before any network call;
//! backend uniqueness rejections (email/phone/address) surface as alerts
//! with an operator-readable message.

use contracts::domain::customer::{uniqueness_hint, CustomerDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::customers::api;
use crate::shared::components::ui::{Button, Input};
use crate::shared::components::{Card, CardContent, CardHeader};
use crate::shared::state::use_stores;

#[component]
pub fn CustomerForm(
    /// Existing customer id; `None` creates a new one.
    #[prop(optional)]
    id: Option<i64>,
    /// Fired after a successful save.
    on_saved: Callback<()>,
) -> impl IntoView {
    let store = use_stores().customers;
    let draft = RwSignal::new(CustomerDraft::default());
    let errors = RwSignal::new(Vec::<(&'static str, String)>::new());
    let (saving, set_saving) = signal(false);

    // Editing: prefill from the backend.
    if let Some(id) = id {
        spawn_local(async move {
            match api::get_customer(id).await {
                Ok(customer) => draft.set(CustomerDraft {
                    name: customer.name,
                    email: customer.email,
                    phone: customer.phone,
                    address: customer.address,
                }),
                Err(err) => log::error!("Failed to fetch customer {}: {}", id, err),
            }
        });
    }

    let field_error = move |field: &'static str| {
        errors.with(|errs| {
            errs.iter()
                .find(|(f, _)| *f == field)
                .map(|(_, msg)| msg.clone())
        })
    };

    let handle_submit = move |_| {
        let current = draft.get_untracked();
        let errs = current.validate();
        let ok = errs.is_empty();
        errors.set(errs);
        if !ok {
            return;
        }

        set_saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_customer(id, &current).await,
                None => api::create_customer(&current).await,
            };
            set_saving.set(false);
            match result {
                Ok(customer) => {
                    match id {
                        Some(_) => store.updated(customer),
                        None => store.created(customer),
                    }
                    on_saved.run(());
                }
                Err(err) => {
                    let message = uniqueness_hint(&err.message)
                        .map(str::to_string)
                        .unwrap_or(err.message);
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&message);
                    }
                }
            }
        });
    };

    view! {
        <Card>
            <CardHeader>
                <h2>{if id.is_some() { "Edit Customer" } else { "Add New Customer" }}</h2>
            </CardHeader>
            <CardContent>
                <Input
                    label="Name"
                    value=Signal::derive(move || draft.with(|d| d.name.clone()))
                    on_input=Callback::new(move |value| draft.update(|d| d.name = value))
                    error=Signal::derive(move || field_error("name"))
                    required=true
                />
                <Input
                    label="Email"
                    input_type="email"
                    value=Signal::derive(move || draft.with(|d| d.email.clone()))
                    on_input=Callback::new(move |value| draft.update(|d| d.email = value))
                    error=Signal::derive(move || field_error("email"))
                    required=true
                />
                <Input
                    label="Phone"
                    value=Signal::derive(move || draft.with(|d| d.phone.clone()))
                    on_input=Callback::new(move |value| draft.update(|d| d.phone = value))
                    error=Signal::derive(move || field_error("phone"))
                    required=true
                />
                <Input
                    label="Address"
                    value=Signal::derive(move || draft.with(|d| d.address.clone()))
                    on_input=Callback::new(move |value| draft.update(|d| d.address = value))
                    error=Signal::derive(move || field_error("address"))
                    required=true
                />
                <div style="margin-top: 16px;">
                    <Button
                        disabled=Signal::derive(move || saving.get())
                        on_click=Callback::new(handle_submit)
                    >
                        {if id.is_some() { "Update Customer" } else { "Save Customer" }}
                    </Button>
                </div>
            </CardContent>
        </Card>
    }
}
