//! REST calls for the warehouses domain, one function per endpoint.

use contracts::domain::inventory::{
    InventoryPatch, InventoryPatchItem, TransferRequest, WarehouseStockItem,
};
use contracts::domain::warehouse::{Warehouse, WarehousePayload, WarehouseTotals};
use contracts::shared::{ListResponse, Pagination};
use serde_json::Value;

use crate::shared::api_utils::ListQuery;
use crate::shared::http::{self, ApiError};

pub async fn fetch_warehouses(query: &ListQuery) -> Result<(Vec<Warehouse>, Pagination), ApiError> {
    let response: ListResponse<Warehouse> =
        http::get_json(&format!("/api/warehouses?{}", query.to_query_string())).await?;
    Ok(response.into_parts())
}

pub async fn get_warehouse(id: i64) -> Result<Warehouse, ApiError> {
    http::get_json(&format!("/api/warehouses/{}", id)).await
}

pub async fn create_warehouse(payload: &WarehousePayload) -> Result<Warehouse, ApiError> {
    http::post_json("/api/warehouses", payload).await
}

pub async fn update_warehouse(id: i64, payload: &WarehousePayload) -> Result<Warehouse, ApiError> {
    http::put_json(&format!("/api/warehouses/{}", id), payload).await
}

pub async fn delete_warehouse(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/warehouses/{}", id)).await
}

/// `{product_id, name, qty}` rows; accepts both the bare array and the
/// `{items}` wrapper.
pub async fn warehouse_inventory(id: i64) -> Result<Vec<WarehouseStockItem>, ApiError> {
    let body: Value = http::get_value(&format!("/api/warehouses/{}/inventory", id)).await?;
    let rows = body.get("items").cloned().unwrap_or(body);
    Ok(serde_json::from_value(rows).unwrap_or_default())
}

/// Upsert absolute quantities; callers refetch the snapshot afterwards.
pub async fn upsert_inventory(id: i64, items: Vec<InventoryPatchItem>) -> Result<(), ApiError> {
    http::patch(
        &format!("/api/warehouses/{}/inventory", id),
        &InventoryPatch { items },
    )
    .await
}

/// Move stock between warehouses (0 = outside any warehouse).
pub async fn transfer_inventory(request: &TransferRequest) -> Result<Value, ApiError> {
    http::post_value("/api/warehouses/transfer", request).await
}

pub async fn total_warehouses() -> Result<i64, ApiError> {
    let totals: WarehouseTotals = http::get_json("/api/warehouses/total").await?;
    Ok(totals.total_warehouses)
}

pub async fn recent_warehouses() -> Result<Vec<Warehouse>, ApiError> {
    http::get_json("/api/warehouses/recent").await
}
