//! Landing dashboard: stat cards, quick actions and recency panels.
//!
//! Every request is fired independently on mount; each card fills in as
//! its data lands and a failed request leaves its card in the dash state
//! instead of blocking the page.

use contracts::domain::customer::Customer;
use contracts::domain::order::Order;
use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::{customers, orders, products};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::Button;
use crate::shared::components::{Card, CardContent, RecentCard, StatCard, ValueFormat};

const LOW_STOCK_THRESHOLD: i64 = 5;

#[component]
pub fn Dashboard() -> impl IntoView {
    let tabs = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let total_customers = RwSignal::new(Option::<f64>::None);
    let total_orders = RwSignal::new(Option::<f64>::None);
    let total_products = RwSignal::new(Option::<f64>::None);
    let total_revenue = RwSignal::new(Option::<f64>::None);
    let recent_orders = RwSignal::new(Vec::<Order>::new());
    let recent_customers = RwSignal::new(Vec::<Customer>::new());
    let recent_products = RwSignal::new(Vec::<Product>::new());
    let low_stock = RwSignal::new(Vec::<Product>::new());

    spawn_local(async move {
        match customers::api::total_customers().await {
            Ok(n) => total_customers.set(Some(n as f64)),
            Err(err) => log::error!("Failed to fetch total customers: {}", err),
        }
    });
    spawn_local(async move {
        match orders::api::total_orders().await {
            Ok(n) => total_orders.set(Some(n as f64)),
            Err(err) => log::error!("Failed to fetch total orders: {}", err),
        }
    });
    spawn_local(async move {
        match products::api::total_products().await {
            Ok(n) => total_products.set(Some(n as f64)),
            Err(err) => log::error!("Failed to fetch total products: {}", err),
        }
    });
    spawn_local(async move {
        match orders::api::total_revenue().await {
            Ok(n) => total_revenue.set(Some(n)),
            Err(err) => log::error!("Failed to fetch total revenue: {}", err),
        }
    });
    spawn_local(async move {
        match orders::api::recent_orders().await {
            Ok(rows) => recent_orders.set(rows),
            Err(err) => log::error!("Failed to fetch recent orders: {}", err),
        }
    });
    spawn_local(async move {
        match customers::api::recent_customers().await {
            Ok(rows) => recent_customers.set(rows),
            Err(err) => log::error!("Failed to fetch recent customers: {}", err),
        }
    });
    spawn_local(async move {
        let recents = match products::api::recent_products().await {
            Ok(rows) => {
                recent_products.set(rows.clone());
                rows
            }
            Err(err) => {
                log::error!("Failed to fetch recent products: {}", err);
                Vec::new()
            }
        };
        // Prefer the server's low-stock list; fall back to filtering the
        // recents when the endpoint is unavailable.
        match products::api::low_stock(LOW_STOCK_THRESHOLD).await {
            Ok(rows) => low_stock.set(rows),
            Err(err) => {
                log::warn!("Failed to fetch low stock: {}", err);
                low_stock.set(
                    recents
                        .into_iter()
                        .filter(|p| p.stock <= LOW_STOCK_THRESHOLD)
                        .collect(),
                );
            }
        }
    });

    view! {
        <div style="padding: 24px; background: #f5f5f5; min-height: 100%;">
            <div style="max-width: 1200px; margin: 0 auto;">
                <div style="margin-bottom: 32px; text-align: center;">
                    <h1 style="margin: 0 0 8px 0;">"Dashboard"</h1>
                    <p style="margin: 0; color: rgba(0, 0, 0, 0.54);">
                        "Welcome to your sales administration dashboard"
                    </p>
                </div>

                // Stats
                <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 24px; margin-bottom: 32px;">
                    <StatCard
                        label="Total Customers".to_string()
                        icon="👤".to_string()
                        value=total_customers
                        format=ValueFormat::Integer
                    />
                    <StatCard
                        label="Total Orders".to_string()
                        icon="📦".to_string()
                        value=total_orders
                        format=ValueFormat::Integer
                    />
                    <StatCard
                        label="Total Products".to_string()
                        icon="🏷️".to_string()
                        value=total_products
                        format=ValueFormat::Integer
                    />
                    <StatCard
                        label="Total Revenue".to_string()
                        icon="💰".to_string()
                        value=total_revenue
                        format=ValueFormat::Money
                    />
                </div>

                // Quick actions
                <Card class="dashboard-actions">
                    <CardContent>
                        <div style="display: flex; gap: 12px; flex-wrap: wrap; justify-content: center; margin-bottom: 16px;">
                            <Button on_click=Callback::new(move |_| tabs.open_tab("customer_new", "New Customer"))>
                                "Add Customer"
                            </Button>
                            <Button on_click=Callback::new(move |_| tabs.open_tab("order_new", "New Order"))>
                                "Add Order"
                            </Button>
                            <Button on_click=Callback::new(move |_| tabs.open_tab("product_new", "New Product"))>
                                "Add Product"
                            </Button>
                        </div>
                        <div style="padding-top: 16px; border-top: 1px solid rgba(0, 0, 0, 0.12); display: flex; gap: 16px; flex-wrap: wrap; justify-content: center;">
                            <a href="#" on:click=move |ev| { ev.prevent_default(); tabs.open_tab("customers", "Customers"); }>
                                "View All Customers"
                            </a>
                            <a href="#" on:click=move |ev| { ev.prevent_default(); tabs.open_tab("orders", "Orders"); }>
                                "View All Orders"
                            </a>
                            <a href="#" on:click=move |ev| { ev.prevent_default(); tabs.open_tab("products", "Products"); }>
                                "View All Products"
                            </a>
                        </div>
                    </CardContent>
                </Card>

                // Recents
                <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(350px, 1fr)); gap: 24px; margin-top: 32px;">
                    <RecentCard
                        title="Recent Orders".to_string()
                        items=recent_orders
                        empty_message="No recent orders".to_string()
                        render_item=|order: &Order| view! {
                            <div class="recent-card__row">
                                <div style="display: flex; justify-content: space-between; margin-bottom: 4px;">
                                    <strong>{format!("Order #{}", order.order_id)}</strong>
                                    <span style="color: #4caf50; font-weight: 600;">
                                        {format!("${:.2}", order.total_price)}
                                    </span>
                                </div>
                                <div style="font-size: 0.875rem; color: rgba(0, 0, 0, 0.54);">
                                    {format!("Customer ID: {} • {}", order.customer_id, order.created_at)}
                                </div>
                            </div>
                        }.into_any()
                    />
                    <RecentCard
                        title="Recent Customers".to_string()
                        items=recent_customers
                        empty_message="No recent customers".to_string()
                        render_item=|customer: &Customer| view! {
                            <div class="recent-card__row">
                                <div style="font-weight: 600; margin-bottom: 4px;">{customer.name.clone()}</div>
                                <div style="font-size: 0.875rem; color: rgba(0, 0, 0, 0.54);">{customer.email.clone()}</div>
                            </div>
                        }.into_any()
                    />
                    <RecentCard
                        title="Recent Products".to_string()
                        items=recent_products
                        empty_message="No recent products".to_string()
                        render_item=|product: &Product| view! {
                            <div class="recent-card__row">
                                <div style="font-weight: 600;">{product.name.clone()}</div>
                                <div style="font-size: 0.875rem; color: rgba(0, 0, 0, 0.54);">
                                    {format!("${:.2}", product.price)}
                                </div>
                            </div>
                        }.into_any()
                    />
                    <RecentCard
                        title=format!("Low Stock (≤ {})", LOW_STOCK_THRESHOLD)
                        items=low_stock
                        empty_message="All good — no low stock items".to_string()
                        render_item=|product: &Product| view! {
                            <div class="recent-card__row recent-card__row--warning">
                                <div style="display: flex; justify-content: space-between;">
                                    <strong>{product.name.clone()}</strong>
                                    <span style="font-weight: 700;">{format!("Stock: {}", product.stock)}</span>
                                </div>
                                <div style="margin-top: 4px; font-size: 0.875rem; color: rgba(0, 0, 0, 0.54);">
                                    {format!("${:.2}", product.price)}
                                </div>
                            </div>
                        }.into_any()
                    />
                </div>
            </div>
        </div>
    }
}
