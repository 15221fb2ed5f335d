//! New Order form: customer typeahead, product + inline warehouse select
//! per line, quantity clamped to the selected warehouse's known stock.
//!
//! All decisions live in [`super::draft::OrderDraft`]; this component only
//! forwards DOM events and network completions into it. Rows are keyed by
//! line index and read the draft through closures, so typing in one line
//! never rebuilds another.

use contracts::domain::customer::Customer;
use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::draft::OrderDraft;
use super::persistence;
use crate::domain::{customers, orders, products};
use crate::shared::components::ui::Button;
use crate::shared::date_utils;

/// Operator account hint sent with every order; the backend re-derives the
/// real user from the bearer token.
const DEFAULT_USER_ID: i64 = 1;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn clamp_message(available: i64) -> String {
    format!(
        "Quantity exceeds available qty ({}) in the selected warehouse. Clamped to {}.",
        available, available
    )
}

#[component]
pub fn OrderForm(
    /// Fired after a successful submission (draft already cleared).
    on_submitted: Callback<()>,
) -> impl IntoView {
    // A reload resumes the unfinished order.
    let (initial_draft, initial_query) = persistence::load();

    let draft = RwSignal::new(initial_draft);
    let customer_query = RwSignal::new(initial_query);
    let customer_options = RwSignal::new(Vec::<Customer>::new());
    let (submitting, set_submitting) = signal(false);
    let (form_error, set_form_error) = signal(Option::<String>::None);

    // Every draft or query change is written straight back to storage.
    Effect::new(move |_| {
        let current = draft.get();
        let query = customer_query.get();
        persistence::save(&current, &query);
    });

    // ----- Customer typeahead -----
    let handle_customer_input = move |value: String| {
        set_form_error.set(None);
        customer_query.set(value.clone());
        draft.update(|d| d.set_customer(None));

        if value.is_empty() {
            customer_options.set(Vec::new());
            return;
        }
        spawn_local(async move {
            match customers::api::search_customers_simple(&value).await {
                Ok(rows) => customer_options.set(rows),
                Err(err) => {
                    log::error!("Failed to search customers: {}", err);
                    customer_options.set(Vec::new());
                }
            }
        });
    };

    let select_customer = move |customer: Customer| {
        let label = if customer.name.is_empty() {
            customer.email.clone()
        } else {
            customer.name.clone()
        };
        customer_query.set(label);
        draft.update(|d| d.set_customer(Some(customer)));
        customer_options.set(Vec::new());
    };

    // ----- Product typeahead (independent per line) -----
    let handle_product_input = move |idx: usize, value: String| {
        set_form_error.set(None);
        draft.update(|d| d.set_product_query(idx, &value));
        if value.is_empty() {
            return;
        }
        spawn_local(async move {
            match products::api::search_products_simple(&value).await {
                Ok(rows) => draft.update(|d| d.product_options_loaded(idx, rows)),
                Err(err) => {
                    log::error!("Failed to search products: {}", err);
                    draft.update(|d| d.product_search_failed(idx));
                }
            }
        });
    };

    let select_product = move |idx: usize, product: Product| {
        draft.update(|d| d.select_product(idx, &product));
        spawn_local(async move {
            match products::api::product_inventory(product.id).await {
                Ok(rows) => draft.update(|d| d.warehouse_options_loaded(idx, rows)),
                Err(err) => {
                    log::warn!(
                        "Failed to load per-warehouse inventory for {}: {}",
                        product.id,
                        err
                    );
                    draft.update(|d| d.warehouse_load_failed(idx));
                }
            }
        });
    };

    let select_warehouse = move |idx: usize, raw: String| {
        let warehouse_id = raw.parse::<i64>().ok();
        let mut clamped = None;
        draft.update(|d| clamped = d.select_warehouse(idx, warehouse_id));
        if let Some(clamp) = clamped {
            alert(&clamp_message(clamp.available));
        }
    };

    let change_quantity = move |idx: usize, raw: String| {
        let value = raw.parse::<f64>().unwrap_or(0.0);
        let mut clamped = None;
        draft.update(|d| clamped = d.set_quantity(idx, value));
        if let Some(clamp) = clamped {
            alert(&clamp_message(clamp.available));
        }
    };

    // ----- Submit -----
    let handle_submit = move |_| {
        set_form_error.set(None);

        let request = draft.with_untracked(|d| {
            d.build_request(
                DEFAULT_USER_ID,
                js_sys::Date::now() as i64,
                date_utils::order_timestamp_now(),
            )
        });
        let order = match request {
            Ok(order) => order,
            Err(message) => {
                set_form_error.set(Some(message));
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            match orders::api::create_order(order).await {
                Ok(_) => {
                    persistence::clear();
                    draft.set(OrderDraft::new());
                    customer_query.set(String::new());
                    customer_options.set(Vec::new());
                    set_submitting.set(false);
                    on_submitted.run(());
                }
                Err(err) => {
                    set_form_error.set(Some(err.message));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="order-form" style="padding: 16px; max-width: 1100px;">
            <h2>"New Order"</h2>

            {move || form_error.get().map(|msg| view! {
                <div style="background: #fdecea; color: #b71c1c; border: 1px solid #f5c6cb; padding: 10px; border-radius: 8px; margin-bottom: 12px;">
                    {msg}
                </div>
            })}

            // Customer
            <h3 style="margin-bottom: 4px;">"Select Customer"</h3>
            <div style="position: relative; width: 675px;">
                <input
                    type="text"
                    class="form__input"
                    placeholder="Search Customers by Name or Email"
                    autocomplete="off"
                    style="width: 100%; height: 42px;"
                    prop:value=move || customer_query.get()
                    on:input=move |ev| handle_customer_input(event_target_value(&ev))
                />
                {move || {
                    let options = customer_options.get();
                    let has_selection = draft.with(|d| d.customer.is_some());
                    if customer_query.get().is_empty() || has_selection || options.is_empty() {
                        return view! { <></> }.into_any();
                    }
                    view! {
                        <div style="position: absolute; top: 42px; left: 0; width: 100%; background: #fff; border: 1px solid #ccc; z-index: 1000; max-height: 200px; overflow-y: auto;">
                            {options.into_iter().map(|option| {
                                let label = option.name.clone();
                                let email = option.email.clone();
                                view! {
                                    <div
                                        style="padding: 8px; cursor: pointer; border-bottom: 1px solid #eee;"
                                        on:mousedown=move |_| select_customer(option.clone())
                                    >
                                        {label}
                                        {(!email.is_empty()).then(|| view! {
                                            <span style="color: #888;">{format!(" ({})", email)}</span>
                                        })}
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </div>

            // Lines
            <div style="margin-top: 16px;">
                <h3 style="margin-bottom: 4px;">"Products:"</h3>
                <Button
                    on_click=Callback::new(move |_| draft.update(|d| d.add_line()))
                    class="order-form__add"
                >
                    "Add Product"
                </Button>

                <For
                    each={move || (0..draft.with(|d| d.lines.len())).collect::<Vec<_>>()}
                    key=|idx| *idx
                    children=move |idx: usize| {
                        view! { <OrderLineRow
                            idx=idx
                            draft=draft
                            on_product_input=Callback::new(move |value| handle_product_input(idx, value))
                            on_product_select=Callback::new(move |product| select_product(idx, product))
                            on_warehouse_select=Callback::new(move |raw| select_warehouse(idx, raw))
                            on_quantity_change=Callback::new(move |raw| change_quantity(idx, raw))
                        /> }
                    }
                />
            </div>

            // Total & submit
            <div style="margin-top: 12px;">
                <h3>{move || format!("Total Price: ${:.2}", draft.with(|d| d.display_total()))}</h3>
            </div>
            <Button
                disabled=Signal::derive(move || submitting.get())
                on_click=Callback::new(handle_submit)
            >
                {move || if submitting.get() { "Submitting..." } else { "Submit Order" }}
            </Button>
        </div>
    }
}

/// One order line. Reads its slice of the draft through closures so edits
/// to other lines leave this row's DOM alone.
#[component]
fn OrderLineRow(
    idx: usize,
    draft: RwSignal<OrderDraft>,
    on_product_input: Callback<String>,
    on_product_select: Callback<Product>,
    on_warehouse_select: Callback<String>,
    on_quantity_change: Callback<String>,
) -> impl IntoView {
    let query = move || draft.with(|d| d.lines.get(idx).map(|l| l.query.clone()).unwrap_or_default());
    let quantity = move || {
        draft.with(|d| d.lines.get(idx).map(|l| l.quantity.to_string()).unwrap_or_default())
    };
    let selected_warehouse =
        move || draft.with(|d| d.lines.get(idx).and_then(|l| l.warehouse_id).unwrap_or(0));
    let product_options = move || {
        draft.with(|d| {
            d.lines
                .get(idx)
                .map(|l| l.product_options.clone())
                .unwrap_or_default()
        })
    };
    let warehouse_options = move || {
        draft.with(|d| {
            d.lines
                .get(idx)
                .map(|l| l.warehouse_options.clone())
                .unwrap_or_default()
        })
    };
    let warehouse_placeholder = move || {
        draft.with(|d| match d.lines.get(idx) {
            Some(l) if l.warehouses_loading => "Loading warehouses…",
            Some(l) if l.warehouse_options.is_empty() => "No stock in any warehouse",
            _ => "Select warehouse…",
        })
    };
    let remove_disabled = move || {
        draft.with(|d| d.lines.len() == 1 && d.lines.first().is_some_and(|l| l.is_blank()))
    };

    view! {
        <div style="display: grid; grid-template-columns: 360px 320px 110px 120px; gap: 12px; margin: 12px 0; align-items: center; position: relative;">
            // Product search
            <div style="position: relative;">
                <input
                    type="text"
                    class="form__input"
                    placeholder="Search Products by Name"
                    autocomplete="off"
                    style="width: 100%; height: 42px;"
                    prop:value=query
                    on:input=move |ev| on_product_input.run(event_target_value(&ev))
                />
                {move || {
                    let options = product_options();
                    if query().is_empty() || options.is_empty() {
                        return view! { <></> }.into_any();
                    }
                    view! {
                        <div style="position: absolute; top: 42px; left: 0; width: 100%; background: #fff; border: 1px solid #ccc; z-index: 1000; max-height: 220px; overflow-y: auto;">
                            {options.into_iter().map(|option| {
                                let name = option.name.clone();
                                let price = option.price;
                                view! {
                                    <div
                                        style="padding: 8px; cursor: pointer; border-bottom: 1px solid #eee;"
                                        on:mousedown=move |_| on_product_select.run(option.clone())
                                    >
                                        <div style="display: flex; justify-content: space-between;">
                                            <span>{name}</span>
                                            <span style="color: #888;">{format!("${:.2}", price)}</span>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </div>

            // Warehouse (inline, no auto-selection)
            <select
                class="form__select"
                style="height: 42px;"
                prop:value=move || {
                    let id = selected_warehouse();
                    if id > 0 { id.to_string() } else { String::new() }
                }
                on:change=move |ev| on_warehouse_select.run(event_target_value(&ev))
            >
                <option value="">{warehouse_placeholder}</option>
                <For
                    each=warehouse_options
                    key=|row| row.warehouse_id
                    children=move |row| {
                        let value = row.warehouse_id.to_string();
                        let text = format!("{} (qty {})", row.warehouse_name, row.qty);
                        let is_selected = move || row.warehouse_id == selected_warehouse();
                        view! { <option value=value selected=is_selected>{text}</option> }
                    }
                />
            </select>

            // Quantity
            <input
                type="number"
                min="0"
                class="form__input"
                placeholder="Qty"
                style="height: 42px;"
                prop:value=quantity
                on:input=move |ev| on_quantity_change.run(event_target_value(&ev))
            />

            // Remove line
            <Button
                variant="secondary"
                disabled=Signal::derive(remove_disabled)
                on_click=Callback::new(move |_| draft.update(|d| d.remove_line(idx)))
            >
                "Remove"
            </Button>
        </div>
    }
}
