//! REST calls for the orders domain, one function per endpoint.

use contracts::domain::order::{
    order_count_from_response, revenue_from_response, CreateOrder, Order,
};
use contracts::shared::{ListResponse, Pagination};
use serde_json::Value;

use crate::shared::api_utils::ListQuery;
use crate::shared::http::{self, ApiError};

/// Submits one atomic order. The payload is validated and its total
/// recomputed before anything goes on the wire; the response body may be
/// empty, in which case the submitted advisory id is echoed back.
pub async fn create_order(order: CreateOrder) -> Result<Value, ApiError> {
    let order = order.normalized().map_err(|message| ApiError {
        status: None,
        message,
    })?;
    let body = http::post_value("/api/create-order", &order).await?;
    if body.as_object().is_some_and(|map| !map.is_empty()) {
        Ok(body)
    } else {
        Ok(serde_json::json!({ "orderId": order.order_id }))
    }
}

pub async fn fetch_orders(query: &ListQuery) -> Result<(Vec<Order>, Pagination), ApiError> {
    let response: ListResponse<Order> =
        http::get_json(&format!("/api/orders?{}", query.to_query_string())).await?;
    Ok(response.into_parts())
}

pub async fn get_order(order_id: i64) -> Result<Order, ApiError> {
    http::get_json(&format!("/api/orders/{}", order_id)).await
}

pub async fn delete_order(order_id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/orders/{}", order_id)).await
}

pub async fn search_orders(
    query: &str,
    page: u32,
    page_size: u32,
) -> Result<(Vec<Order>, Pagination), ApiError> {
    let path = format!(
        "/api/orders/search?q={}&page={}&pageSize={}",
        urlencoding::encode(query),
        page,
        page_size
    );
    let response: ListResponse<Order> = http::get_json(&path).await?;
    Ok(response.into_parts())
}

/// Bare number or `{"totalRevenue": N}`.
pub async fn total_revenue() -> Result<f64, ApiError> {
    let body = http::get_value("/api/orders/total").await?;
    Ok(revenue_from_response(&body))
}

/// Bare number or `{"totalOrders": N}`.
pub async fn total_orders() -> Result<i64, ApiError> {
    let body = http::get_value("/api/orders/total-orders").await?;
    Ok(order_count_from_response(&body))
}

pub async fn recent_orders() -> Result<Vec<Order>, ApiError> {
    let body: Value = http::get_value("/api/orders/recent").await?;
    let rows = body.get("data").cloned().unwrap_or(body);
    Ok(serde_json::from_value(rows).unwrap_or_default())
}
