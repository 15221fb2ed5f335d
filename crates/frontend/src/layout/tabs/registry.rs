//! Tab content registry — the single source of truth mapping tab.key to a
//! view. All tab keys live in this one match.

use leptos::prelude::*;

use crate::dashboards::overview::Dashboard;
use crate::domain::customers::ui::{CustomerForm, CustomerList};
use crate::domain::orders::ui::{OrderDetail, OrderForm, OrderList};
use crate::domain::products::ui::{ProductForm, ProductList};
use crate::domain::warehouses::ui::{WarehouseDetail, WarehouseForm, WarehouseList};
use crate::layout::global_context::AppGlobalContext;

/// After a form saves, land on the domain's list tab and drop the form tab.
fn back_to_list(
    tabs_store: AppGlobalContext,
    own_key: &str,
    list_key: &'static str,
    list_title: &'static str,
) -> Callback<()> {
    let own_key = own_key.to_string();
    Callback::new(move |_| {
        tabs_store.open_tab(list_key, list_title);
        tabs_store.close_tab(&own_key);
    })
}

/// Renders the content for a tab key, or a placeholder for unknown keys.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        "dashboard" => view! { <Dashboard /> }.into_any(),

        // Customers
        "customers" => view! { <CustomerList /> }.into_any(),
        "customer_new" => {
            let on_saved = back_to_list(tabs_store, key, "customers", "Customers");
            view! { <CustomerForm on_saved=on_saved /> }.into_any()
        }
        k if k.starts_with("customer_edit_") => {
            match k.strip_prefix("customer_edit_").and_then(|s| s.parse::<i64>().ok()) {
                Some(id) => {
                    let on_saved = back_to_list(tabs_store, k, "customers", "Customers");
                    view! { <CustomerForm id=id on_saved=on_saved /> }.into_any()
                }
                None => unknown_tab(k),
            }
        }

        // Products
        "products" => view! { <ProductList /> }.into_any(),
        "product_new" => {
            let on_saved = back_to_list(tabs_store, key, "products", "Products");
            view! { <ProductForm on_saved=on_saved /> }.into_any()
        }
        k if k.starts_with("product_edit_") => {
            match k.strip_prefix("product_edit_").and_then(|s| s.parse::<i64>().ok()) {
                Some(id) => {
                    let on_saved = back_to_list(tabs_store, k, "products", "Products");
                    view! { <ProductForm id=id on_saved=on_saved /> }.into_any()
                }
                None => unknown_tab(k),
            }
        }

        // Orders
        "orders" => view! { <OrderList /> }.into_any(),
        "order_new" => {
            let on_submitted = back_to_list(tabs_store, key, "orders", "Orders");
            view! { <OrderForm on_submitted=on_submitted /> }.into_any()
        }
        k if k.starts_with("order_detail_") => {
            match k.strip_prefix("order_detail_").and_then(|s| s.parse::<i64>().ok()) {
                Some(order_id) => view! { <OrderDetail order_id=order_id /> }.into_any(),
                None => unknown_tab(k),
            }
        }

        // Warehouses
        "warehouses" => view! { <WarehouseList /> }.into_any(),
        "warehouse_new" => {
            let on_saved = back_to_list(tabs_store, key, "warehouses", "Warehouses");
            view! { <WarehouseForm on_saved=on_saved /> }.into_any()
        }
        k if k.starts_with("warehouse_edit_") => {
            match k.strip_prefix("warehouse_edit_").and_then(|s| s.parse::<i64>().ok()) {
                Some(id) => {
                    let on_saved = back_to_list(tabs_store, k, "warehouses", "Warehouses");
                    view! { <WarehouseForm id=id on_saved=on_saved /> }.into_any()
                }
                None => unknown_tab(k),
            }
        }
        k if k.starts_with("warehouse_detail_") => {
            match k.strip_prefix("warehouse_detail_").and_then(|s| s.parse::<i64>().ok()) {
                Some(warehouse_id) => {
                    view! { <WarehouseDetail warehouse_id=warehouse_id /> }.into_any()
                }
                None => unknown_tab(k),
            }
        }

        other => unknown_tab(other),
    }
}

fn unknown_tab(key: &str) -> AnyView {
    log::warn!("unknown tab key: {}", key);
    view! { <div style="padding: 16px; color: #888;">"Nothing to show here."</div> }.into_any()
}
