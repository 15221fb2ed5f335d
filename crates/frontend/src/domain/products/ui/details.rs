//! Create/edit product form, plus the per-warehouse inventory panel with
//! the transfer flow when editing an existing product.

use contracts::domain::inventory::{StockRow, TransferRequest};
use contracts::domain::product::ProductDraft;
use contracts::domain::warehouse::Warehouse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::products::api;
use crate::domain::warehouses;
use crate::shared::api_utils::ListQuery;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::components::{Card, CardContent, CardHeader};
use crate::shared::state::use_stores;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn ProductForm(
    /// Existing product id; `None` creates a new one.
    #[prop(optional)]
    id: Option<i64>,
    /// Fired after a successful save.
    on_saved: Callback<()>,
) -> impl IntoView {
    let store = use_stores().products;
    let draft = RwSignal::new(ProductDraft::default());
    let errors = RwSignal::new(Vec::<(&'static str, String)>::new());
    let (saving, set_saving) = signal(false);

    if let Some(id) = id {
        spawn_local(async move {
            match api::get_product(id).await {
                Ok(product) => draft.set(ProductDraft {
                    name: product.name.clone(),
                    price: format!("{}", product.price),
                    stock: product.available_stock().to_string(),
                    description: product.description.clone().unwrap_or_default(),
                }),
                Err(err) => log::error!("Failed to fetch product {}: {}", id, err),
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
                Some(id) => api::update_product(id, &payload).await,
                None => api::create_product(&payload).await,
            };
            set_saving.set(false);
            match result {
                Ok(product) => {
                    match id {
                        Some(_) => store.updated(product),
                        None => store.created(product),
                    }
                    on_saved.run(());
                }
                Err(err) => alert(&err.message),
            }
        });
    };

    view! {
        <Card>
            <CardHeader>
                <h2>{if id.is_some() { "Edit Product" } else { "Add New Product" }}</h2>
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
                    label="Price"
                    input_type="number"
                    value=Signal::derive(move || draft.with(|d| d.price.clone()))
                    on_input=Callback::new(move |value| draft.update(|d| d.price = value))
                    error=Signal::derive(move || field_error("price"))
                    required=true
                />
                <Input
                    label="Stock"
                    input_type="number"
                    value=Signal::derive(move || draft.with(|d| d.stock.clone()))
                    on_input=Callback::new(move |value| draft.update(|d| d.stock = value))
                    error=Signal::derive(move || field_error("stock"))
                />
                <Input
                    label="Description"
                    value=Signal::derive(move || draft.with(|d| d.description.clone()))
                    on_input=Callback::new(move |value| draft.update(|d| d.description = value))
                />
                <div style="margin-top: 16px;">
                    <Button
                        disabled=Signal::derive(move || saving.get())
                        on_click=Callback::new(handle_submit)
                    >
                        {if id.is_some() { "Update Product" } else { "Save Product" }}
                    </Button>
                </div>

                {id.map(|product_id| view! { <ProductInventoryPanel product_id=product_id /> })}
            </CardContent>
        </Card>
    }
}

/// Per-warehouse stock for the edited product, with a transfer form.
/// Transfers refetch the inventory snapshot once the backend confirms.
#[component]
fn ProductInventoryPanel(product_id: i64) -> impl IntoView {
    let inventory = RwSignal::new(Vec::<StockRow>::new());
    let all_warehouses = RwSignal::new(Vec::<Warehouse>::new());
    let from_warehouse = RwSignal::new(String::new());
    let to_warehouse = RwSignal::new(String::new());
    let qty = RwSignal::new(String::new());
    let (transferring, set_transferring) = signal(false);

    let load_inventory = move || {
        spawn_local(async move {
            match api::product_inventory(product_id).await {
                Ok(rows) => inventory.set(rows),
                Err(err) => {
                    log::warn!("Failed to load inventory for {}: {}", product_id, err);
                    inventory.set(Vec::new());
                }
            }
        });
    };

    load_inventory();

    // Transfer targets come from the warehouse list, not the product's
    // current rows, so stock can move into an empty warehouse.
    spawn_local(async move {
        match warehouses::api::fetch_warehouses(&ListQuery::page(1, 100)).await {
            Ok((rows, _)) => all_warehouses.set(rows),
            Err(err) => log::warn!("Failed to load warehouses: {}", err),
        }
    });

    let from_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "From warehouse…".to_string())];
        options.extend(
            inventory
                .get()
                .into_iter()
                .map(|row| (row.warehouse_id.to_string(), format!("{} (qty {})", row.warehouse_name, row.qty))),
        );
        options
    });
    let to_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "To warehouse…".to_string())];
        options.extend(
            all_warehouses
                .get()
                .into_iter()
                .map(|w| (w.id.to_string(), w.name)),
        );
        options
    });

    let handle_transfer = move |_| {
        let from = from_warehouse.get_untracked().parse::<i64>().unwrap_or(0);
        let to = to_warehouse.get_untracked().parse::<i64>().unwrap_or(0);
        let amount = qty.get_untracked().parse::<i64>().unwrap_or(0);
        if to <= 0 || amount <= 0 {
            alert("Pick a destination warehouse and a quantity > 0.");
            return;
        }
        if from == to {
            alert("Source and destination warehouses must differ.");
            return;
        }

        set_transferring.set(true);
        spawn_local(async move {
            let request = TransferRequest {
                product_id,
                from_warehouse_id: from,
                to_warehouse_id: to,
                qty: amount,
            };
            match warehouses::api::transfer_inventory(&request).await {
                Ok(_) => {
                    qty.set(String::new());
                    load_inventory();
                }
                Err(err) => alert(&err.message),
            }
            set_transferring.set(false);
        });
    };

    view! {
        <div style="margin-top: 24px; border-top: 1px solid #e5e7eb; padding-top: 16px;">
            <h3>"Inventory by Warehouse"</h3>
            <table style="width: 100%; border-collapse: collapse; margin-bottom: 12px;">
                <thead>
                    <tr>
                        <th style="text-align: left; padding: 8px;">"Warehouse"</th>
                        <th style="text-align: left; padding: 8px;">"Qty"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = inventory.get();
                        if rows.is_empty() {
                            return view! {
                                <tr><td colspan="2" style="padding: 8px; text-align: center;">"No stock in any warehouse."</td></tr>
                            }.into_any();
                        }
                        rows.into_iter().map(|row| view! {
                            <tr>
                                <td style="padding: 8px;">{row.warehouse_name.clone()}</td>
                                <td style="padding: 8px;">{row.qty}</td>
                            </tr>
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>

            <h4>"Transfer Stock"</h4>
            <div style="display: grid; grid-template-columns: 1fr 1fr 120px 120px; gap: 12px; align-items: end;">
                <Select
                    value=Signal::derive(move || from_warehouse.get())
                    options=from_options
                    on_change=Callback::new(move |value| from_warehouse.set(value))
                />
                <Select
                    value=Signal::derive(move || to_warehouse.get())
                    options=to_options
                    on_change=Callback::new(move |value| to_warehouse.set(value))
                />
                <Input
                    input_type="number"
                    placeholder="Qty"
                    value=Signal::derive(move || qty.get())
                    on_input=Callback::new(move |value| qty.set(value))
                />
                <Button
                    disabled=Signal::derive(move || transferring.get())
                    on_click=Callback::new(handle_transfer)
                >
                    "Transfer"
                </Button>
            </div>
        </div>
    }
}
