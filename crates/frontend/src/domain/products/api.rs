//! REST calls for the products domain, one function per endpoint.

use contracts::domain::inventory::{normalize_stock_rows, StockRow};
use contracts::domain::product::{Product, ProductPayload, ProductTotals};
use contracts::shared::{ListResponse, Pagination};
use serde_json::{json, Value};

use crate::shared::api_utils::ListQuery;
use crate::shared::http::{self, ApiError};

pub async fn fetch_products(query: &ListQuery) -> Result<(Vec<Product>, Pagination), ApiError> {
    let response: ListResponse<Product> =
        http::get_json(&format!("/api/products?{}", query.to_query_string())).await?;
    Ok(response.into_parts())
}

pub async fn get_product(id: i64) -> Result<Product, ApiError> {
    http::get_json(&format!("/api/products/{}", id)).await
}

pub async fn create_product(payload: &ProductPayload) -> Result<Product, ApiError> {
    http::post_json("/api/create-product", payload).await
}

pub async fn update_product(id: i64, payload: &ProductPayload) -> Result<Product, ApiError> {
    http::put_json(&format!("/api/products/{}", id), payload).await
}

pub async fn delete_product(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/products/{}", id)).await
}

pub async fn search_products(
    query: &str,
    page: u32,
    page_size: u32,
) -> Result<(Vec<Product>, Pagination), ApiError> {
    let path = format!(
        "/api/products/search?q={}&page={}&pageSize={}",
        urlencoding::encode(query),
        page,
        page_size
    );
    let response: ListResponse<Product> = http::get_json(&path).await?;
    Ok(response.into_parts())
}

/// Typeahead endpoint: rows only, `{data}` envelope optional.
pub async fn search_products_simple(query: &str) -> Result<Vec<Product>, ApiError> {
    let body: Value = http::get_value(&format!(
        "/api/products/search-simple?q={}",
        urlencoding::encode(query)
    ))
    .await?;
    let rows = body.get("data").cloned().unwrap_or(body);
    Ok(serde_json::from_value(rows).unwrap_or_default())
}

pub async fn total_products() -> Result<i64, ApiError> {
    let totals: ProductTotals = http::get_json("/api/products/total-products").await?;
    Ok(totals.total_products)
}

pub async fn recent_products() -> Result<Vec<Product>, ApiError> {
    http::get_json("/api/products/recent").await
}

pub async fn low_stock(threshold: i64) -> Result<Vec<Product>, ApiError> {
    http::get_json(&format!("/api/products/low-stock?threshold={}", threshold)).await
}

/// Per-warehouse stock rows for one product; the endpoint's shape varies,
/// so the body is normalized rather than deserialized directly.
pub async fn product_inventory(product_id: i64) -> Result<Vec<StockRow>, ApiError> {
    let body = http::get_value(&format!("/api/products/{}/inventory", product_id)).await?;
    Ok(normalize_stock_rows(&body))
}

pub async fn update_product_stock(id: i64, stock: i64) -> Result<Value, ApiError> {
    http::put_json(&format!("/api/products/{}/stock", id), &json!({ "stock": stock })).await
}
