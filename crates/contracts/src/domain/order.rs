use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: i64,
    pub quantity: i64,
    pub sale_price: f64,
    #[serde(default)]
    pub warehouse_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse_name: Option<String>,
}

impl OrderItem {
    pub fn extension(&self) -> f64 {
        self.quantity as f64 * self.sale_price
    }

    pub fn is_valid(&self) -> bool {
        self.product_id > 0
            && self.quantity > 0
            && self.sale_price.is_finite()
            && self.sale_price >= 0.0
            && self.warehouse_id > 0
    }
}

/// Order as listed/fetched. List rows may also carry the joined customer
/// columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i64,
    #[serde(default)]
    pub customer_id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub product_items: Vec<OrderItem>,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

/// Creation payload. `order_id` is a client-generated timestamp hint; the
/// server may re-derive it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub order_id: i64,
    pub customer_id: i64,
    pub user_id: i64,
    pub product_items: Vec<OrderItem>,
    pub total_price: f64,
    pub created_at: String,
}

impl CreateOrder {
    pub fn computed_total(&self) -> f64 {
        self.product_items.iter().map(OrderItem::extension).sum()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.customer_id <= 0 {
            return Err("Please select a customer.".to_string());
        }
        if self.product_items.is_empty() {
            return Err("Add at least one product.".to_string());
        }
        for (idx, item) in self.product_items.iter().enumerate() {
            if !item.is_valid() {
                return Err(format!(
                    "Line {}: productId, quantity (>0), salePrice, and warehouseId are required.",
                    idx + 1
                ));
            }
        }
        Ok(())
    }

    /// Validates and overwrites `total_price` with the recomputed sum; a
    /// caller-supplied total is never trusted.
    pub fn normalized(mut self) -> Result<Self, String> {
        self.validate()?;
        self.total_price = self.computed_total();
        Ok(self)
    }
}

/// `GET /api/orders/total` answers either a bare number or
/// `{"totalRevenue": N}`.
pub fn revenue_from_response(body: &Value) -> f64 {
    number_or_field(body, "totalRevenue")
}

/// `GET /api/orders/total-orders` answers either a bare number or
/// `{"totalOrders": N}`.
pub fn order_count_from_response(body: &Value) -> i64 {
    number_or_field(body, "totalOrders") as i64
}

fn number_or_field(body: &Value, field: &str) -> f64 {
    match body {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::Object(map) => map.get(field).and_then(Value::as_f64).unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(product_id: i64, quantity: i64, sale_price: f64, warehouse_id: i64) -> OrderItem {
        OrderItem {
            product_id,
            quantity,
            sale_price,
            warehouse_id,
            warehouse_name: None,
        }
    }

    fn create(items: Vec<OrderItem>) -> CreateOrder {
        CreateOrder {
            order_id: 1722945600000,
            customer_id: 42,
            user_id: 1,
            product_items: items,
            total_price: 0.0,
            created_at: "August 6, 2025, 10:00 AM".into(),
        }
    }

    #[test]
    fn test_normalized_recomputes_total() {
        let mut order = create(vec![item(1, 3, 9.99, 7), item(2, 1, 5.0, 7)]);
        order.total_price = 999.0;
        let normalized = order.normalized().unwrap();
        assert!((normalized.total_price - 34.97).abs() < 1e-9);
    }

    #[test]
    fn test_missing_warehouse_names_the_line() {
        let order = create(vec![item(1, 3, 9.99, 7), item(2, 1, 5.0, 0)]);
        let err = order.normalized().unwrap_err();
        assert!(err.starts_with("Line 2:"), "{err}");
    }

    #[test]
    fn test_customer_required_before_lines() {
        let mut order = create(vec![item(1, 1, 1.0, 1)]);
        order.customer_id = 0;
        assert_eq!(order.validate().unwrap_err(), "Please select a customer.");
    }

    #[test]
    fn test_empty_items_rejected() {
        let order = create(Vec::new());
        assert_eq!(order.validate().unwrap_err(), "Add at least one product.");
    }

    #[test]
    fn test_item_wire_names_are_camel_case() {
        let body = serde_json::to_value(item(3, 2, 1.5, 9)).unwrap();
        assert_eq!(body["productId"], 3);
        assert_eq!(body["salePrice"], 1.5);
        assert_eq!(body["warehouseId"], 9);
    }

    #[test]
    fn test_stat_responses_accept_both_shapes() {
        assert_eq!(revenue_from_response(&json!(12.5)), 12.5);
        assert_eq!(revenue_from_response(&json!({"totalRevenue": 3.0})), 3.0);
        assert_eq!(revenue_from_response(&json!({"other": 3.0})), 0.0);
        assert_eq!(order_count_from_response(&json!(7)), 7);
        assert_eq!(order_count_from_response(&json!({"totalOrders": 2})), 2);
    }
}
