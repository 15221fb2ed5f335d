//! Client-side state machine for composing an order.
//!
//! Pure data and transitions; the component in `view.rs` only wires these
//! methods to DOM events and network completions. Quantity/warehouse
//! clamping is last-writer-wins against whichever warehouse snapshot is
//! already cached for the line — a stale snapshot clamps to stale numbers,
//! and the backend stays the authority on submit.

use contracts::domain::customer::Customer;
use contracts::domain::inventory::{sellable_rows, StockRow};
use contracts::domain::order::{CreateOrder, OrderItem};
use contracts::domain::product::Product;
use serde::{Deserialize, Serialize};

/// One product+warehouse+quantity entry in the order being composed.
///
/// The serialized shape (camelCase, search state skipped) is also the
/// localStorage draft format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: Option<i64>,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub quantity: i64,
    /// Derived from the selected product; not editable.
    #[serde(default)]
    pub unit_price: f64,
    pub warehouse_id: Option<i64>,

    // Ephemeral search state, never persisted.
    #[serde(skip)]
    pub query: String,
    #[serde(skip)]
    pub product_options: Vec<Product>,
    #[serde(skip)]
    pub warehouse_options: Vec<StockRow>,
    #[serde(skip)]
    pub warehouses_loading: bool,
}

impl OrderLine {
    pub fn blank() -> Self {
        Self {
            product_id: None,
            product_name: String::new(),
            quantity: 1,
            unit_price: 0.0,
            warehouse_id: None,
            query: String::new(),
            product_options: Vec::new(),
            warehouse_options: Vec::new(),
            warehouses_loading: false,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.product_id.is_none() && self.warehouse_id.is_none() && self.query.is_empty()
    }

    fn to_item(&self) -> OrderItem {
        OrderItem {
            product_id: self.product_id.unwrap_or(0),
            quantity: self.quantity,
            sale_price: self.unit_price,
            warehouse_id: self.warehouse_id.unwrap_or(0),
            warehouse_name: None,
        }
    }
}

/// Signal that a quantity was forced down to the warehouse's known stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clamped {
    pub available: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer: Option<Customer>,
    pub lines: Vec<OrderLine>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderDraft {
    pub fn new() -> Self {
        Self {
            customer: None,
            lines: vec![OrderLine::blank()],
        }
    }

    /// The line list is never empty.
    pub fn ensure_line(&mut self) {
        if self.lines.is_empty() {
            self.lines.push(OrderLine::blank());
        }
    }

    pub fn set_customer(&mut self, customer: Option<Customer>) {
        self.customer = customer;
    }

    pub fn set_product_query(&mut self, idx: usize, value: &str) {
        if let Some(line) = self.lines.get_mut(idx) {
            line.query = value.to_string();
            if value.is_empty() {
                line.product_options.clear();
            }
        }
    }

    /// Search results for a line; products with no stock anywhere are not
    /// offered.
    pub fn product_options_loaded(&mut self, idx: usize, hits: Vec<Product>) {
        if let Some(line) = self.lines.get_mut(idx) {
            line.product_options = hits
                .into_iter()
                .filter(|p| p.available_stock() > 0)
                .collect();
        }
    }

    pub fn product_search_failed(&mut self, idx: usize) {
        if let Some(line) = self.lines.get_mut(idx) {
            line.product_options.clear();
        }
    }

    /// Fixes the line to a product. The warehouse is deliberately left
    /// unset — the operator picks it once the per-warehouse stock arrives.
    pub fn select_product(&mut self, idx: usize, product: &Product) {
        if let Some(line) = self.lines.get_mut(idx) {
            line.product_id = Some(product.id);
            line.product_name = product.name.clone();
            line.unit_price = product.price;
            if line.quantity <= 0 {
                line.quantity = 1;
            }
            line.warehouse_id = None;
            line.query = product.name.clone();
            line.product_options.clear();
            line.warehouse_options.clear();
            line.warehouses_loading = true;
        }
    }

    pub fn warehouse_options_loaded(&mut self, idx: usize, rows: Vec<StockRow>) {
        if let Some(line) = self.lines.get_mut(idx) {
            line.warehouse_options = sellable_rows(rows);
            line.warehouses_loading = false;
            line.warehouse_id = None;
        }
    }

    /// Inventory fetch failures never block the line; it just has no
    /// warehouses to offer.
    pub fn warehouse_load_failed(&mut self, idx: usize) {
        if let Some(line) = self.lines.get_mut(idx) {
            line.warehouse_options.clear();
            line.warehouses_loading = false;
            line.warehouse_id = None;
        }
    }

    pub fn select_warehouse(&mut self, idx: usize, warehouse_id: Option<i64>) -> Option<Clamped> {
        let line = self.lines.get_mut(idx)?;
        line.warehouse_id = warehouse_id.filter(|id| *id > 0);
        self.clamp_line(idx)
    }

    pub fn set_quantity(&mut self, idx: usize, raw: f64) -> Option<Clamped> {
        let line = self.lines.get_mut(idx)?;
        line.quantity = if raw.is_finite() { raw.max(0.0) as i64 } else { 0 };
        self.clamp_line(idx)
    }

    /// Clamp against whichever snapshot is cached for the line. Not
    /// refetched at clamp time, so the bound can be stale; accepted.
    fn clamp_line(&mut self, idx: usize) -> Option<Clamped> {
        let line = self.lines.get_mut(idx)?;
        let warehouse_id = line.warehouse_id?;
        let row = line
            .warehouse_options
            .iter()
            .find(|r| r.warehouse_id == warehouse_id)?;
        if line.quantity > row.qty {
            let available = row.qty;
            line.quantity = available;
            Some(Clamped { available })
        } else {
            None
        }
    }

    pub fn add_line(&mut self) {
        self.lines.push(OrderLine::blank());
    }

    /// Removing the last remaining line resets it to blank instead.
    pub fn remove_line(&mut self, idx: usize) {
        if self.lines.len() <= 1 {
            self.lines = vec![OrderLine::blank()];
        } else if idx < self.lines.len() {
            self.lines.remove(idx);
        }
    }

    /// Running total shown while composing, over every line.
    pub fn display_total(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| l.quantity.max(0) as f64 * l.unit_price)
            .sum()
    }

    /// Lines that survive submission filtering.
    pub fn valid_items(&self) -> Vec<OrderItem> {
        self.lines
            .iter()
            .map(OrderLine::to_item)
            .filter(OrderItem::is_valid)
            .collect()
    }

    /// Builds the creation payload, or the operator-facing reason it cannot
    /// be built. Never touches the network.
    pub fn build_request(
        &self,
        user_id: i64,
        order_id: i64,
        created_at: String,
    ) -> Result<CreateOrder, String> {
        let customer = self
            .customer
            .as_ref()
            .filter(|c| c.id > 0)
            .ok_or_else(|| "Please select a customer.".to_string())?;

        let items = self.valid_items();
        if items.is_empty() {
            return Err(
                "Add at least one valid product (select product, warehouse and quantity > 0)."
                    .to_string(),
            );
        }

        let order = CreateOrder {
            order_id,
            customer_id: customer.id,
            user_id,
            product_items: items,
            total_price: 0.0,
            created_at,
        }
        .normalized()?;

        if order.total_price <= 0.0 {
            return Err("Total price must be greater than zero.".to_string());
        }
        Ok(order)
    }

    /// Clears customer, lines, queries and option caches back to a single
    /// blank line.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer {
            id: 7,
            name: "Jane".into(),
            email: "jane@example.com".into(),
            phone: "555-123-4567".into(),
            address: "12 Harbor Street".into(),
        }
    }

    fn product(id: i64, name: &str, price: f64, stock: i64) -> Product {
        Product {
            id,
            name: name.into(),
            price,
            stock,
            total_stock: None,
            warehouses_count: None,
            description: None,
        }
    }

    fn row(warehouse_id: i64, name: &str, qty: i64) -> StockRow {
        StockRow {
            warehouse_id,
            warehouse_name: name.into(),
            qty,
        }
    }

    #[test]
    fn test_starts_with_one_blank_line() {
        let draft = OrderDraft::new();
        assert_eq!(draft.lines.len(), 1);
        assert!(draft.lines[0].is_blank());
        assert_eq!(draft.lines[0].quantity, 1);
    }

    #[test]
    fn test_product_options_drop_out_of_stock() {
        let mut draft = OrderDraft::new();
        draft.product_options_loaded(
            0,
            vec![
                product(1, "Widget", 9.99, 3),
                product(2, "Gadget", 5.0, 0),
                product(3, "Sprocket", 2.0, -1),
            ],
        );
        let names: Vec<_> = draft.lines[0]
            .product_options
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Widget"]);
    }

    #[test]
    fn test_select_product_resets_warehouse_and_starts_loading() {
        let mut draft = OrderDraft::new();
        draft.lines[0].warehouse_id = Some(4);
        draft.select_product(0, &product(1, "Widget", 9.99, 3));
        let line = &draft.lines[0];
        assert_eq!(line.product_id, Some(1));
        assert_eq!(line.unit_price, 9.99);
        assert_eq!(line.warehouse_id, None);
        assert!(line.warehouses_loading);
        assert_eq!(line.query, "Widget");
        assert!(line.product_options.is_empty());
    }

    #[test]
    fn test_warehouse_options_sorted_desc_without_empty_rows() {
        let mut draft = OrderDraft::new();
        draft.warehouse_options_loaded(
            0,
            vec![row(1, "East", 2), row(2, "Empty", 0), row(3, "West", 9)],
        );
        let qtys: Vec<_> = draft.lines[0]
            .warehouse_options
            .iter()
            .map(|r| r.qty)
            .collect();
        assert_eq!(qtys, vec![9, 2]);
        assert!(!draft.lines[0].warehouses_loading);
    }

    #[test]
    fn test_selecting_low_stock_warehouse_clamps_quantity() {
        let mut draft = OrderDraft::new();
        draft.select_product(0, &product(1, "Widget", 9.99, 5));
        draft.warehouse_options_loaded(0, vec![row(5, "West", 3)]);
        draft.set_quantity(0, 5.0);
        let clamped = draft.select_warehouse(0, Some(5));
        assert_eq!(clamped, Some(Clamped { available: 3 }));
        assert_eq!(draft.lines[0].quantity, 3);
    }

    #[test]
    fn test_quantity_change_clamps_against_selected_warehouse() {
        let mut draft = OrderDraft::new();
        draft.select_product(0, &product(1, "Widget", 9.99, 5));
        draft.warehouse_options_loaded(0, vec![row(5, "West", 3)]);
        assert_eq!(draft.select_warehouse(0, Some(5)), None);
        let clamped = draft.set_quantity(0, 10.0);
        assert_eq!(clamped, Some(Clamped { available: 3 }));
        assert_eq!(draft.lines[0].quantity, 3);
    }

    #[test]
    fn test_quantity_without_warehouse_is_only_floored_at_zero() {
        let mut draft = OrderDraft::new();
        assert_eq!(draft.set_quantity(0, -4.0), None);
        assert_eq!(draft.lines[0].quantity, 0);
        assert_eq!(draft.set_quantity(0, f64::NAN), None);
        assert_eq!(draft.lines[0].quantity, 0);
        assert_eq!(draft.set_quantity(0, 12.0), None);
        assert_eq!(draft.lines[0].quantity, 12);
    }

    #[test]
    fn test_removing_only_line_leaves_one_blank_line() {
        let mut draft = OrderDraft::new();
        draft.select_product(0, &product(1, "Widget", 9.99, 5));
        draft.remove_line(0);
        assert_eq!(draft.lines.len(), 1);
        assert!(draft.lines[0].is_blank());
    }

    #[test]
    fn test_removing_a_middle_line_keeps_the_rest() {
        let mut draft = OrderDraft::new();
        draft.add_line();
        draft.add_line();
        draft.select_product(1, &product(2, "Gadget", 5.0, 2));
        draft.remove_line(0);
        assert_eq!(draft.lines.len(), 2);
        assert_eq!(draft.lines[0].product_id, Some(2));
    }

    #[test]
    fn test_submit_requires_customer_before_anything_else() {
        let mut draft = OrderDraft::new();
        draft.select_product(0, &product(1, "Widget", 9.99, 5));
        draft.warehouse_options_loaded(0, vec![row(5, "West", 3)]);
        draft.select_warehouse(0, Some(5));
        let err = draft.build_request(1, 100, "now".into()).unwrap_err();
        assert_eq!(err, "Please select a customer.");
    }

    #[test]
    fn test_submit_with_no_valid_lines_fails_with_specific_message() {
        let mut draft = OrderDraft::new();
        draft.set_customer(Some(customer()));
        // Product chosen but no warehouse — the line does not count.
        draft.select_product(0, &product(1, "Widget", 9.99, 5));
        let err = draft.build_request(1, 100, "now".into()).unwrap_err();
        assert!(err.starts_with("Add at least one valid product"));
    }

    #[test]
    fn test_clamp_then_submit_example() {
        // Jane, one line: Widget at 9.99, warehouse West holds 3, operator
        // types 5 -> clamped to 3, total 29.97.
        let mut draft = OrderDraft::new();
        draft.set_customer(Some(customer()));
        draft.select_product(0, &product(1, "Widget", 9.99, 5));
        draft.warehouse_options_loaded(0, vec![row(5, "West", 3)]);
        draft.select_warehouse(0, Some(5));
        let clamped = draft.set_quantity(0, 5.0);
        assert_eq!(clamped, Some(Clamped { available: 3 }));

        let order = draft.build_request(1, 1722945600000, "now".into()).unwrap();
        assert_eq!(order.product_items.len(), 1);
        assert_eq!(order.product_items[0].quantity, 3);
        assert!((order.total_price - 29.97).abs() < 1e-9);
    }

    #[test]
    fn test_submission_uses_only_valid_lines() {
        let mut draft = OrderDraft::new();
        draft.set_customer(Some(customer()));
        draft.select_product(0, &product(1, "Widget", 9.99, 5));
        draft.warehouse_options_loaded(0, vec![row(5, "West", 3)]);
        draft.select_warehouse(0, Some(5));
        draft.set_quantity(0, 2.0);
        // Second line never gets a warehouse.
        draft.add_line();
        draft.select_product(1, &product(2, "Gadget", 5.0, 2));

        let order = draft.build_request(1, 100, "now".into()).unwrap();
        assert_eq!(order.product_items.len(), 1);
        assert!((order.total_price - 19.98).abs() < 1e-9);
        // The display total still reflects every line.
        assert!((draft.display_total() - (19.98 + 5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_rejected() {
        let mut draft = OrderDraft::new();
        draft.set_customer(Some(customer()));
        draft.select_product(0, &product(1, "Freebie", 0.0, 5));
        draft.warehouse_options_loaded(0, vec![row(5, "West", 3)]);
        draft.select_warehouse(0, Some(5));
        draft.set_quantity(0, 2.0);
        let err = draft.build_request(1, 100, "now".into()).unwrap_err();
        assert_eq!(err, "Total price must be greater than zero.");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut draft = OrderDraft::new();
        draft.set_customer(Some(customer()));
        draft.select_product(0, &product(1, "Widget", 9.99, 5));
        draft.add_line();
        draft.reset();
        assert!(draft.customer.is_none());
        assert_eq!(draft.lines.len(), 1);
        assert!(draft.lines[0].is_blank());
    }

    #[test]
    fn test_stale_snapshot_clamps_to_stale_bound() {
        // The clamp uses the cached rows even if newer data exists
        // elsewhere; last writer wins.
        let mut draft = OrderDraft::new();
        draft.select_product(0, &product(1, "Widget", 9.99, 5));
        draft.warehouse_options_loaded(0, vec![row(5, "West", 3)]);
        draft.select_warehouse(0, Some(5));
        draft.warehouse_options_loaded(0, vec![row(5, "West", 1)]);
        // Reloading options resets the warehouse selection, so re-select.
        draft.select_warehouse(0, Some(5));
        let clamped = draft.set_quantity(0, 2.0);
        assert_eq!(clamped, Some(Clamped { available: 1 }));
    }

    #[test]
    fn test_persisted_shape_skips_search_state() {
        let mut draft = OrderDraft::new();
        draft.select_product(0, &product(1, "Widget", 9.99, 5));
        draft.lines[0].query = "Wid".into();
        let value = serde_json::to_value(&draft.lines).unwrap();
        let line = &value[0];
        assert_eq!(line["productId"], 1);
        assert_eq!(line["unitPrice"], 9.99);
        assert!(line.get("query").is_none());
        assert!(line.get("productOptions").is_none());

        let restored: Vec<OrderLine> = serde_json::from_value(value).unwrap();
        assert_eq!(restored[0].product_id, Some(1));
        assert!(restored[0].query.is_empty());
        assert!(!restored[0].warehouses_loading);
    }
}
