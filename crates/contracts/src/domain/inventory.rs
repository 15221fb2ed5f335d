use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-warehouse stock for one product, normalized from the inventory
/// endpoint's heterogeneous shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRow {
    pub warehouse_id: i64,
    pub warehouse_name: String,
    pub qty: i64,
}

/// One product row inside a warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseStockItem {
    pub product_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub qty: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryPatch {
    pub items: Vec<InventoryPatchItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryPatchItem {
    pub product_id: i64,
    pub qty: i64,
}

/// `from_warehouse_id`/`to_warehouse_id` of 0 mean "outside any warehouse".
#[derive(Debug, Clone, Serialize)]
pub struct TransferRequest {
    pub product_id: i64,
    pub from_warehouse_id: i64,
    pub to_warehouse_id: i64,
    pub qty: i64,
}

/// Accepts a bare array, `{"data": [...]}` or `{"items": [...]}`; rows may
/// name their fields `warehouse_id`/`warehouseId`/`id`, `warehouse_name`/`name`
/// and `qty`/`quantity`. Anything unrecognized normalizes to no rows.
pub fn normalize_stock_rows(body: &Value) -> Vec<StockRow> {
    let rows = match body {
        Value::Array(rows) => rows.as_slice(),
        Value::Object(map) => match map.get("data").or_else(|| map.get("items")) {
            Some(Value::Array(rows)) => rows.as_slice(),
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    rows.iter()
        .filter_map(|row| {
            let warehouse_id = int_field(row, &["warehouse_id", "warehouseId", "id"])?;
            if warehouse_id <= 0 {
                return None;
            }
            let warehouse_name = row
                .get("warehouse_name")
                .or_else(|| row.get("name"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("#{}", warehouse_id));
            let qty = int_field(row, &["qty", "quantity"]).unwrap_or(0);
            Some(StockRow {
                warehouse_id,
                warehouse_name,
                qty,
            })
        })
        .collect()
}

/// Rows an operator can actually pick from: positive stock only, highest
/// stock first.
pub fn sellable_rows(mut rows: Vec<StockRow>) -> Vec<StockRow> {
    rows.retain(|r| r.qty > 0);
    rows.sort_by(|a, b| b.qty.cmp(&a.qty));
    rows
}

fn int_field(row: &Value, names: &[&str]) -> Option<i64> {
    names.iter().find_map(|name| {
        let v = row.get(name)?;
        v.as_i64().or_else(|| v.as_f64().map(|f| f as i64))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array_with_canonical_fields() {
        let body = json!([
            {"warehouse_id": 1, "warehouse_name": "West", "qty": 3},
            {"warehouse_id": 2, "warehouse_name": "East", "qty": 9}
        ]);
        let rows = normalize_stock_rows(&body);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].warehouse_name, "West");
    }

    #[test]
    fn test_data_and_items_envelopes() {
        let enveloped = json!({"data": [{"warehouseId": 4, "name": "North", "quantity": 2}]});
        let rows = normalize_stock_rows(&enveloped);
        assert_eq!(
            rows,
            vec![StockRow {
                warehouse_id: 4,
                warehouse_name: "North".into(),
                qty: 2
            }]
        );

        let items = json!({"items": [{"id": 5, "qty": 1}]});
        let rows = normalize_stock_rows(&items);
        assert_eq!(rows[0].warehouse_id, 5);
        assert_eq!(rows[0].warehouse_name, "#5");
    }

    #[test]
    fn test_unrecognized_bodies_normalize_to_empty() {
        assert!(normalize_stock_rows(&json!("oops")).is_empty());
        assert!(normalize_stock_rows(&json!({"rows": []})).is_empty());
        assert!(normalize_stock_rows(&json!(null)).is_empty());
    }

    #[test]
    fn test_rows_without_a_warehouse_id_are_dropped() {
        let body = json!([{"qty": 5}, {"warehouse_id": 0, "qty": 5}]);
        assert!(normalize_stock_rows(&body).is_empty());
    }

    #[test]
    fn test_sellable_rows_filters_and_sorts_descending() {
        let rows = vec![
            StockRow {
                warehouse_id: 1,
                warehouse_name: "A".into(),
                qty: 2,
            },
            StockRow {
                warehouse_id: 2,
                warehouse_name: "B".into(),
                qty: 0,
            },
            StockRow {
                warehouse_id: 3,
                warehouse_name: "C".into(),
                qty: 7,
            },
        ];
        let sellable = sellable_rows(rows);
        let qtys: Vec<_> = sellable.iter().map(|r| r.qty).collect();
        assert_eq!(qtys, vec![7, 2]);
    }
}
