//! Sales orders list: search, pagination, open detail, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::orders::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::ListQuery;
use crate::shared::components::ui::Button;
use crate::shared::components::{Card, CardContent, CardHeader, PaginationControls, SearchInput};
use crate::shared::state::{use_stores, LoadStatus};

#[component]
pub fn OrderList() -> impl IntoView {
    let store = use_stores().orders;
    let tabs = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1u32);
    let (page_size, set_page_size) = signal(20u32);

    let load = move || {
        store.start();
        let query = search.get_untracked();
        let page = page.get_untracked();
        let page_size = page_size.get_untracked();
        spawn_local(async move {
            let result = if query.is_empty() {
                api::fetch_orders(&ListQuery::page(page, page_size)).await
            } else {
                api::search_orders(&query, page, page_size).await
            };
            match result {
                Ok((rows, pagination)) => store.loaded(rows, pagination),
                Err(err) => {
                    log::error!("Failed to load orders: {}", err);
                    store.failed(err.message);
                }
            }
        });
    };

    load();

    let handle_search = Callback::new(move |value: String| {
        set_search.set(value);
        set_page.set(1);
        load();
    });
    let handle_page_change = Callback::new(move |new_page: u32| {
        set_page.set(new_page);
        load();
    });
    let handle_page_size_change = Callback::new(move |size: u32| {
        set_page_size.set(size);
        set_page.set(1);
        load();
    });

    let handle_delete = move |order_id: i64| {
        spawn_local(async move {
            match api::delete_order(order_id).await {
                Ok(()) => {
                    store.removed(order_id);
                    load();
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
                <h2>"Sales Orders"</h2>
                <Button on_click=Callback::new(move |_| tabs.open_tab("order_new", "New Order"))>
                    "New Order"
                </Button>
            </CardHeader>
            <CardContent>
                <div style="margin-bottom: 16px;">
                    <SearchInput
                        value=search
                        on_change=handle_search
                        placeholder="Search by customer, order ID, or date"
                    />
                </div>
                <table style="width: 100%; border-collapse: collapse;">
                    <thead>
                        <tr>
                            <th style="text-align: left; padding: 8px;">"Order ID"</th>
                            <th style="text-align: left; padding: 8px;">"Customer"</th>
                            <th style="text-align: left; padding: 8px;">"Email"</th>
                            <th style="text-align: left; padding: 8px;">"Date"</th>
                            <th style="text-align: left; padding: 8px;">"Total"</th>
                            <th style="text-align: left; padding: 8px;">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if store.status.get() == LoadStatus::Loading {
                                return view! {
                                    <tr><td colspan="6" style="padding: 8px; text-align: center;">"Loading..."</td></tr>
                                }.into_any();
                            }
                            let rows = store.list.get();
                            if rows.is_empty() {
                                return view! {
                                    <tr><td colspan="6" style="padding: 8px; text-align: center;">"No orders found."</td></tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|order| {
                                let order_id = order.order_id;
                                let customer = order.customer_name.clone().unwrap_or_else(|| format!("#{}", order.customer_id));
                                let email = order.customer_email.clone().unwrap_or_default();
                                view! {
                                    <tr>
                                        <td style="padding: 8px;">{order_id}</td>
                                        <td style="padding: 8px;">{customer}</td>
                                        <td style="padding: 8px;">{email}</td>
                                        <td style="padding: 8px;">{order.created_at.clone()}</td>
                                        <td style="padding: 8px;">{format!("${:.2}", order.total_price)}</td>
                                        <td style="padding: 8px;">
                                            <Button
                                                size="sm"
                                                on_click=Callback::new(move |_| {
                                                    tabs.open_tab(
                                                        &format!("order_detail_{}", order_id),
                                                        &format!("Order #{}", order_id),
                                                    );
                                                })
                                            >
                                                "View"
                                            </Button>
                                            <Button
                                                variant="secondary"
                                                size="sm"
                                                class="ml-8"
                                                on_click=Callback::new(move |_| handle_delete(order_id))
                                            >
                                                "Delete"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
                <div style="margin-top: 16px;">
                    <PaginationControls
                        pagination=store.pagination
                        on_page_change=handle_page_change
                        on_page_size_change=handle_page_size_change
                    />
                </div>
            </CardContent>
        </Card>
    }
}
