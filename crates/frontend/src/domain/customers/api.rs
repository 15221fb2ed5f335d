//! REST calls for the customers domain, one function per endpoint.

use contracts::domain::customer::{Customer, CustomerDraft, CustomerTotals};
use contracts::shared::{ListResponse, Pagination};
use serde_json::Value;

use crate::shared::api_utils::ListQuery;
use crate::shared::http::{self, ApiError};

pub async fn fetch_customers(query: &ListQuery) -> Result<(Vec<Customer>, Pagination), ApiError> {
    let response: ListResponse<Customer> =
        http::get_json(&format!("/api/customers?{}", query.to_query_string())).await?;
    Ok(response.into_parts())
}

pub async fn get_customer(id: i64) -> Result<Customer, ApiError> {
    http::get_json(&format!("/api/customers/{}", id)).await
}

pub async fn create_customer(draft: &CustomerDraft) -> Result<Customer, ApiError> {
    http::post_json("/api/create-customer", draft).await
}

pub async fn update_customer(id: i64, draft: &CustomerDraft) -> Result<Customer, ApiError> {
    http::put_json(&format!("/api/customers/{}", id), draft).await
}

pub async fn delete_customer(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/customers/{}", id)).await
}

pub async fn search_customers(
    query: &str,
    page: u32,
    page_size: u32,
) -> Result<(Vec<Customer>, Pagination), ApiError> {
    let path = format!(
        "/api/customers/search?q={}&page={}&pageSize={}",
        urlencoding::encode(query),
        page,
        page_size
    );
    let response: ListResponse<Customer> = http::get_json(&path).await?;
    Ok(response.into_parts())
}

/// Typeahead endpoint: rows only, no pagination, `{data}` envelope optional.
pub async fn search_customers_simple(query: &str) -> Result<Vec<Customer>, ApiError> {
    let body: Value = http::get_value(&format!(
        "/api/customers/search-simple?q={}",
        urlencoding::encode(query)
    ))
    .await?;
    let rows = body.get("data").cloned().unwrap_or(body);
    Ok(serde_json::from_value(rows).unwrap_or_default())
}

pub async fn total_customers() -> Result<i64, ApiError> {
    let totals: CustomerTotals = http::get_json("/api/customers/total-customers").await?;
    Ok(totals.total_customers)
}

pub async fn recent_customers() -> Result<Vec<Customer>, ApiError> {
    http::get_json("/api/customers/recent").await
}
