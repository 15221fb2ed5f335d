pub mod draft;
pub mod persistence;
pub mod view;

pub use view::OrderForm;
