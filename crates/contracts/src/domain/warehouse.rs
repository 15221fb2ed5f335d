use serde::{Deserialize, Serialize};

/// Coordinates travel as strings on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub capacity: i64,
}

/// Form state for create/edit; capacity is kept as typed text until
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseDraft {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub capacity: String,
}

impl WarehouseDraft {
    pub fn from_warehouse(w: &Warehouse) -> Self {
        Self {
            name: w.name.clone(),
            latitude: w.latitude.clone(),
            longitude: w.longitude.clone(),
            capacity: w.capacity.to_string(),
        }
    }

    pub fn validate(&self) -> Vec<(&'static str, String)> {
        let mut errs = Vec::new();

        if self.name.trim().is_empty() {
            errs.push(("name", "Name is required".to_string()));
        }
        if self.latitude.trim().is_empty() {
            errs.push(("latitude", "Latitude is required".to_string()));
        }
        if self.longitude.trim().is_empty() {
            errs.push(("longitude", "Longitude is required".to_string()));
        }

        if self.capacity.trim().is_empty() {
            errs.push(("capacity", "Capacity is required".to_string()));
        } else {
            match self.capacity.trim().parse::<i64>() {
                Ok(c) if c >= 0 => {}
                Ok(_) => errs.push(("capacity", "Capacity must be ≥ 0".to_string())),
                Err(_) => errs.push(("capacity", "Capacity must be a number".to_string())),
            }
        }

        errs
    }

    pub fn to_payload(&self) -> Option<WarehousePayload> {
        let capacity = self.capacity.trim().parse::<i64>().ok()?;
        if capacity < 0 {
            return None;
        }
        Some(WarehousePayload {
            name: self.name.trim().to_string(),
            latitude: self.latitude.trim().to_string(),
            longitude: self.longitude.trim().to_string(),
            capacity,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarehousePayload {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub capacity: i64,
}

/// `{"totalWarehouses": N}` from the totals endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WarehouseTotals {
    #[serde(rename = "totalWarehouses", default)]
    pub total_warehouses: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_round_trip() {
        let w = Warehouse {
            id: 9,
            name: "West".into(),
            latitude: "37.77".into(),
            longitude: "-122.41".into(),
            capacity: 500,
        };
        let draft = WarehouseDraft::from_warehouse(&w);
        assert!(draft.validate().is_empty());
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.name, "West");
        assert_eq!(payload.capacity, 500);
    }

    #[test]
    fn test_capacity_must_be_numeric() {
        let draft = WarehouseDraft {
            name: "West".into(),
            latitude: "1".into(),
            longitude: "2".into(),
            capacity: "lots".into(),
        };
        let errs = draft.validate();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].0, "capacity");
        assert!(draft.to_payload().is_none());
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let draft = WarehouseDraft {
            name: "West".into(),
            latitude: "1".into(),
            longitude: "2".into(),
            capacity: "-3".into(),
        };
        assert_eq!(draft.validate()[0].1, "Capacity must be ≥ 0");
    }
}
