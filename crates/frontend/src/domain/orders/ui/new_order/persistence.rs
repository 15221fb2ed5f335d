//! localStorage persistence for the in-progress order draft, so a page
//! reload resumes an unfinished order.

use contracts::domain::customer::Customer;

use super::draft::{OrderDraft, OrderLine};
use crate::shared::storage;

pub const PRODUCTS_KEY: &str = "orderFormProducts";
pub const PRODUCT_QUERIES_KEY: &str = "orderFormProductQueries";
pub const CUSTOMER_QUERY_KEY: &str = "orderFormCustomerQuery";
pub const SELECTED_CUSTOMER_KEY: &str = "orderFormSelectedCustomer";

/// Persist the draft: lines, per-line search text, customer box text and
/// the selected customer, each under its fixed key.
pub fn save(draft: &OrderDraft, customer_query: &str) {
    storage::set_json(PRODUCTS_KEY, &draft.lines);
    let queries: Vec<&str> = draft.lines.iter().map(|l| l.query.as_str()).collect();
    storage::set_json(PRODUCT_QUERIES_KEY, &queries);
    storage::set(CUSTOMER_QUERY_KEY, customer_query);
    match &draft.customer {
        Some(customer) => storage::set_json(SELECTED_CUSTOMER_KEY, customer),
        None => storage::remove(SELECTED_CUSTOMER_KEY),
    }
}

/// Restore a previously saved draft; anything missing or corrupt falls back
/// to a fresh draft with one blank line.
pub fn load() -> (OrderDraft, String) {
    let mut draft = OrderDraft::new();

    if let Some(lines) = storage::get_json::<Vec<OrderLine>>(PRODUCTS_KEY) {
        if !lines.is_empty() {
            draft.lines = lines;
        }
    }
    if let Some(queries) = storage::get_json::<Vec<String>>(PRODUCT_QUERIES_KEY) {
        for (line, query) in draft.lines.iter_mut().zip(queries) {
            line.query = query;
        }
    }
    draft.customer = storage::get_json::<Customer>(SELECTED_CUSTOMER_KEY);
    draft.ensure_line();

    let customer_query = storage::get(CUSTOMER_QUERY_KEY).unwrap_or_default();
    (draft, customer_query)
}

/// Forget the draft after a successful submit.
pub fn clear() {
    storage::remove(PRODUCTS_KEY);
    storage::remove(PRODUCT_QUERIES_KEY);
    storage::remove(CUSTOMER_QUERY_KEY);
    storage::remove(SELECTED_CUSTOMER_KEY);
}
