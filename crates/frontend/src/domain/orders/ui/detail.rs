//! Full order information including the warehouse that fulfilled each line.

use contracts::domain::order::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::orders::api;
use crate::shared::components::{Card, CardContent, CardHeader};

#[component]
pub fn OrderDetail(order_id: i64) -> impl IntoView {
    let (order, set_order) = signal(Option::<Order>::None);
    let (error, set_error) = signal(Option::<String>::None);

    spawn_local(async move {
        match api::get_order(order_id).await {
            Ok(data) => set_order.set(Some(data)),
            Err(err) => {
                log::error!("Failed to fetch order {}: {}", order_id, err);
                set_error.set(Some(err.message));
            }
        }
    });

    view! {
        <Card>
            <CardHeader>
                <h2>{format!("Order #{}", order_id)}</h2>
            </CardHeader>
            <CardContent>
                {move || {
                    if let Some(message) = error.get() {
                        return view! { <div class="error">{message}</div> }.into_any();
                    }
                    let Some(order) = order.get() else {
                        return view! { <div>"Loading..."</div> }.into_any();
                    };
                    view! {
                        <p><strong>"Customer ID: "</strong>{order.customer_id}</p>
                        <p><strong>"Date: "</strong>{order.created_at.clone()}</p>
                        <p><strong>"Total Price: "</strong>{format!("${:.2}", order.total_price)}</p>
                        <hr/>
                        <h3>"Items:"</h3>
                        <ul>
                            {order.product_items.iter().map(|item| {
                                let warehouse = item
                                    .warehouse_name
                                    .clone()
                                    .unwrap_or_else(|| if item.warehouse_id > 0 {
                                        format!("#{}", item.warehouse_id)
                                    } else {
                                        "N/A".to_string()
                                    });
                                view! {
                                    <li style="margin-bottom: 8px;">
                                        <strong>{format!("Product ID: {}", item.product_id)}</strong>
                                        <br/>
                                        {format!("Quantity: {} | Unit Price: ${:.2}", item.quantity, item.sale_price)}
                                        <br/>
                                        {format!("Warehouse: {}", warehouse)}
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }}
            </CardContent>
        </Card>
    }
}
