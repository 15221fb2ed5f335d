pub mod pagination;

pub use pagination::{ListResponse, Pagination};
