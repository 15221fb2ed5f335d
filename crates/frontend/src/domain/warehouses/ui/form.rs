//! Create/edit warehouse form.

use contracts::domain::warehouse::WarehouseDraft;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::warehouses::api;
use crate::shared::components::ui::{Button, Input};
use crate::shared::components::{Card, CardContent, CardHeader};
use crate::shared::state::use_stores;

#[component]
pub fn WarehouseForm(
    /// Existing warehouse id; `None` creates a new one.
    #[prop(optional)]
    id: Option<i64>,
    /// Fired after a successful save.
    on_saved: Callback<()>,
) -> impl IntoView {
    let store = use_stores().warehouses;
    let draft = RwSignal::new(WarehouseDraft::default());
    let errors = RwSignal::new(Vec::<(&'static str, String)>::new());
    let (saving, set_saving) = signal(false);

    if let Some(id) = id {
        spawn_local(async move {
            match api::get_warehouse(id).await {
                Ok(warehouse) => draft.set(WarehouseDraft::from_warehouse(&warehouse)),
                Err(err) => log::error!("Failed to fetch warehouse {}: {}", id, err),
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
        let Some(payload) = current.to_payload() else {
            return;
        };

        set_saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_warehouse(id, &payload).await,
                None => api::create_warehouse(&payload).await,
            };
            set_saving.set(false);
            match result {
                Ok(warehouse) => {
                    match id {
                        Some(_) => store.updated(warehouse),
                        None => store.created(warehouse),
                    }
                    on_saved.run(());
                }
                Err(err) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&err.message);
                    }
                }
            }
        });
    };

    view! {
        <Card>
            <CardHeader>
                <h2>{if id.is_some() { "Edit Warehouse" } else { "Add New Warehouse" }}</h2>
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
                    label="Latitude"
                    value=Signal::derive(move || draft.with(|d| d.latitude.clone()))
                    on_input=Callback::new(move |value| draft.update(|d| d.latitude = value))
                    error=Signal::derive(move || field_error("latitude"))
                    required=true
                />
                <Input
                    label="Longitude"
                    value=Signal::derive(move || draft.with(|d| d.longitude.clone()))
                    on_input=Callback::new(move |value| draft.update(|d| d.longitude = value))
                    error=Signal::derive(move || field_error("longitude"))
                    required=true
                />
                <Input
                    label="Capacity"
                    input_type="number"
                    value=Signal::derive(move || draft.with(|d| d.capacity.clone()))
                    on_input=Callback::new(move |value| draft.update(|d| d.capacity = value))
                    error=Signal::derive(move || field_error("capacity"))
                    required=true
                />
                <div style="margin-top: 16px;">
                    <Button
                        disabled=Signal::derive(move || saving.get())
                        on_click=Callback::new(handle_submit)
                    >
                        {if id.is_some() { "Update Warehouse" } else { "Save Warehouse" }}
                    </Button>
                </div>
            </CardContent>
        </Card>
    }
}
