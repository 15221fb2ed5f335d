//! Warehouse detail: KPIs, inventory table with ±1 adjusters, and an
//! add-product flow driven by the product typeahead.
//!
//! The adjusters apply the delta locally before the server confirms; a
//! rejected write only alerts, it does not roll the number back.

use contracts::domain::inventory::{InventoryPatchItem, WarehouseStockItem};
use contracts::domain::product::Product;
use contracts::domain::warehouse::Warehouse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::products;
use crate::domain::warehouses::api;
use crate::shared::components::ui::{Button, Input};
use crate::shared::components::{Card, CardContent, CardHeader};

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn WarehouseDetail(warehouse_id: i64) -> impl IntoView {
    let warehouse = RwSignal::new(Option::<Warehouse>::None);
    let inventory = RwSignal::new(Vec::<WarehouseStockItem>::new());
    let (loading, set_loading) = signal(true);

    // Add-product UI state
    let (add_open, set_add_open) = signal(false);
    let product_query = RwSignal::new(String::new());
    let product_results = RwSignal::new(Vec::<Product>::new());
    let selected_product = RwSignal::new(Option::<Product>::None);
    let new_qty = RwSignal::new(String::new());

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::get_warehouse(warehouse_id).await {
                Ok(data) => warehouse.set(Some(data)),
                Err(err) => log::error!("Failed to fetch warehouse {}: {}", warehouse_id, err),
            }
            match api::warehouse_inventory(warehouse_id).await {
                Ok(items) => inventory.set(items),
                Err(err) => {
                    log::warn!("Failed to load inventory for {}: {}", warehouse_id, err);
                    inventory.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    };

    load();

    // Live product search for the Add section; an empty query lists all.
    let handle_product_query = move |value: String| {
        product_query.set(value.clone());
        spawn_local(async move {
            match products::api::search_products_simple(&value).await {
                Ok(rows) => product_results.set(rows),
                Err(err) => {
                    log::error!("Failed to search products: {}", err);
                    product_results.set(Vec::new());
                }
            }
        });
    };

    handle_product_query(String::new());

    // ±1 adjuster: local first, then the absolute value goes to the server.
    let adjust_qty = move |product_id: i64, delta: i64| {
        let current = inventory.with_untracked(|items| {
            items
                .iter()
                .find(|i| i.product_id == product_id)
                .map(|i| i.qty)
                .unwrap_or(0)
        });
        let next = (current + delta).max(0);
        inventory.update(|items| {
            if let Some(item) = items.iter_mut().find(|i| i.product_id == product_id) {
                item.qty = next;
            }
        });
        spawn_local(async move {
            let items = vec![InventoryPatchItem {
                product_id,
                qty: next,
            }];
            if let Err(err) = api::upsert_inventory(warehouse_id, items).await {
                alert(&err.message);
            }
        });
    };

    let handle_add = move |_| {
        let Some(product) = selected_product.get_untracked() else {
            alert("Pick a product first.");
            return;
        };
        let qty = match new_qty.get_untracked().trim().parse::<i64>() {
            Ok(q) if q >= 0 => q,
            _ => {
                alert("Quantity must be ≥ 0");
                return;
            }
        };

        spawn_local(async move {
            let items = vec![InventoryPatchItem {
                product_id: product.id,
                qty,
            }];
            match api::upsert_inventory(warehouse_id, items).await {
                Ok(()) => {
                    match api::warehouse_inventory(warehouse_id).await {
                        Ok(rows) => inventory.set(rows),
                        Err(err) => {
                            log::warn!("Failed to refresh inventory: {}", err);
                        }
                    }
                    selected_product.set(None);
                    new_qty.set(String::new());
                    product_query.set(String::new());
                    set_add_open.set(false);
                }
                Err(err) => alert(&err.message),
            }
        });
    };

    view! {
        <Card>
            <CardHeader>
                <h2>{move || {
                    warehouse
                        .get()
                        .map(|w| format!("Warehouse: {}", w.name))
                        .unwrap_or_else(|| "Warehouse".to_string())
                }}</h2>
            </CardHeader>
            <CardContent>
                {move || {
                    if loading.get() {
                        return view! { <div>"Loading…"</div> }.into_any();
                    }
                    let Some(w) = warehouse.get() else {
                        return view! { <div>"Not found."</div> }.into_any();
                    };
                    view! {
                        <div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px; margin-bottom: 16px;">
                            <Kpi label="ID" value=w.id.to_string() />
                            <Kpi label="Capacity" value=w.capacity.to_string() />
                            <Kpi label="Latitude" value=w.latitude.clone() />
                            <Kpi label="Longitude" value=w.longitude.clone() />
                        </div>
                    }.into_any()
                }}

                // Add product to inventory
                <div style="margin-bottom: 16px; border: 1px solid #e5e7eb; border-radius: 12px;">
                    <div style="padding: 12px; display: flex; justify-content: space-between; align-items: center;">
                        <h3 style="margin: 0;">"Add Product to Inventory"</h3>
                        <Button on_click=Callback::new(move |_| set_add_open.update(|v| *v = !*v))>
                            {move || if add_open.get() { "Close" } else { "Add" }}
                        </Button>
                    </div>

                    {move || add_open.get().then(|| view! {
                        <div style="padding: 12px; border-top: 1px solid #e5e7eb;">
                            <div style="display: grid; grid-template-columns: 1fr 160px 120px; gap: 12px;">
                                <div>
                                    <Input
                                        label="Search product"
                                        placeholder="Type name or leave empty to list all"
                                        value=Signal::derive(move || product_query.get())
                                        on_input=Callback::new(handle_product_query)
                                    />
                                    <div style="margin-top: 8px; max-height: 160px; overflow-y: auto; border: 1px solid #eee; border-radius: 8px;">
                                        {move || {
                                            let results = product_results.get();
                                            if results.is_empty() {
                                                return view! { <div style="padding: 8px; color: #6b7280;">"No results"</div> }.into_any();
                                            }
                                            results.into_iter().map(|product| {
                                                let is_selected = selected_product
                                                    .get()
                                                    .is_some_and(|p| p.id == product.id);
                                                let name = product.name.clone();
                                                let meta = format!(
                                                    "ID #{} • Price ${:.2} • Stock {}",
                                                    product.id, product.price, product.available_stock()
                                                );
                                                view! {
                                                    <div
                                                        style=format!(
                                                            "padding: 8px; cursor: pointer; background: {};",
                                                            if is_selected { "rgba(63,81,181,0.08)" } else { "transparent" }
                                                        )
                                                        on:click=move |_| selected_product.set(Some(product.clone()))
                                                    >
                                                        <div style="font-weight: 600;">{name}</div>
                                                        <div style="font-size: 12px; color: #6b7280;">{meta}</div>
                                                    </div>
                                                }
                                            }).collect_view().into_any()
                                        }}
                                    </div>
                                </div>
                                <Input
                                    label="Quantity"
                                    input_type="number"
                                    value=Signal::derive(move || new_qty.get())
                                    on_input=Callback::new(move |value| new_qty.set(value))
                                />
                                <div style="display: flex; align-items: end;">
                                    <Button
                                        disabled=Signal::derive(move || {
                                            selected_product.get().is_none() || new_qty.get().is_empty()
                                        })
                                        on_click=Callback::new(handle_add)
                                    >
                                        "Add"
                                    </Button>
                                </div>
                            </div>
                            {move || selected_product.get().map(|p| view! {
                                <div style="margin-top: 8px; color: #6b7280; font-size: 14px;">
                                    "Selected: " <strong>{p.name.clone()}</strong> {format!(" (ID #{})", p.id)}
                                </div>
                            })}
                        </div>
                    })}
                </div>

                // Inventory table
                <h3 style="margin-bottom: 8px;">"Inventory"</h3>
                <table style="width: 100%; border-collapse: collapse;">
                    <thead>
                        <tr>
                            <th style="text-align: left; padding: 8px;">"Product ID"</th>
                            <th style="text-align: left; padding: 8px;">"Name"</th>
                            <th style="text-align: left; padding: 8px;">"Qty"</th>
                            <th style="text-align: left; padding: 8px;">"Adjust"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = inventory.get();
                            if items.is_empty() {
                                return view! {
                                    <tr><td colspan="4" style="text-align: center; padding: 8px;">"No inventory yet."</td></tr>
                                }.into_any();
                            }
                            items.into_iter().map(|row| {
                                let product_id = row.product_id;
                                view! {
                                    <tr>
                                        <td style="padding: 8px;">{product_id}</td>
                                        <td style="padding: 8px;">{row.name.clone()}</td>
                                        <td style="padding: 8px;">{row.qty}</td>
                                        <td style="padding: 8px;">
                                            <Button size="sm" on_click=Callback::new(move |_| adjust_qty(product_id, -1))>
                                                "-1"
                                            </Button>
                                            <Button size="sm" class="ml-8" on_click=Callback::new(move |_| adjust_qty(product_id, 1))>
                                                "+1"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </CardContent>
        </Card>
    }
}

#[component]
fn Kpi(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div style="border: 1px solid #e5e7eb; border-radius: 12px; padding: 12px;">
            <div style="color: #6b7280; font-size: 12px;">{label}</div>
            <div style="font-size: 18px; font-weight: 600;">{value}</div>
        </div>
    }
}
