use serde::{Deserialize, Serialize};

/// Pagination metadata attached to listing responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Metadata synthesized for an endpoint that returned a bare array.
    pub fn single_page(len: usize) -> Self {
        Self {
            page: 1,
            page_size: len as u32,
            total_count: len as u64,
            total_pages: 1,
            has_next: false,
            has_prev: false,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            total_count: 0,
            total_pages: 0,
            has_next: false,
            has_prev: false,
        }
    }
}

/// List endpoints answer either `{data, pagination}` or a bare array.
/// Deserialize once into this union and normalize with [`ListResponse::into_parts`]
/// so downstream code only ever sees one shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paged { data: Vec<T>, pagination: Pagination },
    Bare(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn into_parts(self) -> (Vec<T>, Pagination) {
        match self {
            ListResponse::Paged { data, pagination } => (data, pagination),
            ListResponse::Bare(rows) => {
                let pagination = Pagination::single_page(rows.len());
                (rows, pagination)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enveloped_response() {
        let body = r#"{
            "data": [1, 2, 3],
            "pagination": {"page": 2, "pageSize": 3, "totalCount": 7, "totalPages": 3, "hasNext": true, "hasPrev": true}
        }"#;
        let parsed: ListResponse<i64> = serde_json::from_str(body).unwrap();
        let (rows, pagination) = parsed.into_parts();
        assert_eq!(rows, vec![1, 2, 3]);
        assert_eq!(pagination.page, 2);
        assert_eq!(pagination.total_count, 7);
        assert!(pagination.has_next);
    }

    #[test]
    fn test_bare_array_response() {
        let parsed: ListResponse<i64> = serde_json::from_str("[10, 20]").unwrap();
        let (rows, pagination) = parsed.into_parts();
        assert_eq!(rows, vec![10, 20]);
        assert_eq!(pagination, Pagination::single_page(2));
        assert_eq!(pagination.page_size, 2);
        assert!(!pagination.has_next);
        assert!(!pagination.has_prev);
    }

    #[test]
    fn test_garbage_is_an_error() {
        let parsed: Result<ListResponse<i64>, _> = serde_json::from_str(r#"{"nope": true}"#);
        assert!(parsed.is_err());
    }
}
