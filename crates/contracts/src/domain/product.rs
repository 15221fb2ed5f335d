use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    /// Aggregate across warehouses; present on list rows, absent on
    /// simple-search rows.
    #[serde(rename = "totalStock", default, skip_serializing_if = "Option::is_none")]
    pub total_stock: Option<i64>,
    #[serde(
        rename = "warehousesCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub warehouses_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Prefers the per-warehouse aggregate, falls back to the legacy
    /// `stock` column.
    pub fn available_stock(&self) -> i64 {
        self.total_stock.unwrap_or(self.stock)
    }
}

/// Create/update payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub description: String,
}

impl ProductDraft {
    pub fn validate(&self) -> Vec<(&'static str, String)> {
        let mut errs = Vec::new();

        if self.name.trim().is_empty() {
            errs.push(("name", "Name is required".to_string()));
        }

        if self.price.trim().is_empty() {
            errs.push(("price", "Price is required".to_string()));
        } else {
            match self.price.trim().parse::<f64>() {
                Ok(p) if p >= 0.0 => {}
                Ok(_) => errs.push(("price", "Price must be ≥ 0".to_string())),
                Err(_) => errs.push(("price", "Price must be a number".to_string())),
            }
        }

        if !self.stock.trim().is_empty() {
            match self.stock.trim().parse::<i64>() {
                Ok(s) if s >= 0 => {}
                _ => errs.push(("stock", "Stock must be a non-negative number".to_string())),
            }
        }

        errs
    }

    /// Wire payload; call only after `validate` returned no errors.
    pub fn to_payload(&self) -> Option<ProductPayload> {
        let price = self.price.trim().parse::<f64>().ok()?;
        let stock = if self.stock.trim().is_empty() {
            0
        } else {
            self.stock.trim().parse::<i64>().ok()?
        };
        let description = self.description.trim();
        Some(ProductPayload {
            name: self.name.trim().to_string(),
            price,
            stock,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `{"totalProducts": N}` from the totals endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ProductTotals {
    #[serde(rename = "totalProducts", default)]
    pub total_products: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_stock_prefers_aggregate() {
        let mut p = Product {
            id: 1,
            name: "Widget".into(),
            price: 9.99,
            stock: 4,
            total_stock: Some(11),
            warehouses_count: Some(2),
            description: None,
        };
        assert_eq!(p.available_stock(), 11);
        p.total_stock = None;
        assert_eq!(p.available_stock(), 4);
    }

    #[test]
    fn test_simple_search_row_parses_without_aggregate() {
        let p: Product =
            serde_json::from_str(r#"{"id": 3, "name": "Widget", "price": 9.99, "stock": 7}"#)
                .unwrap();
        assert_eq!(p.available_stock(), 7);
        assert!(p.total_stock.is_none());
    }

    #[test]
    fn test_draft_validation() {
        let mut d = ProductDraft {
            name: "Widget".into(),
            price: "9.99".into(),
            stock: "3".into(),
            description: String::new(),
        };
        assert!(d.validate().is_empty());

        d.price = "cheap".into();
        assert_eq!(d.validate()[0].0, "price");

        d.price = "-1".into();
        assert_eq!(d.validate()[0].0, "price");
    }

    #[test]
    fn test_payload_defaults_empty_stock_to_zero() {
        let d = ProductDraft {
            name: " Widget ".into(),
            price: "9.99".into(),
            stock: String::new(),
            description: " heavy duty ".into(),
        };
        let payload = d.to_payload().unwrap();
        assert_eq!(payload.name, "Widget");
        assert_eq!(payload.stock, 0);
        assert_eq!(payload.description.as_deref(), Some("heavy duty"));
    }
}
