pub mod card;
pub mod pagination_controls;
pub mod recent_card;
pub mod search_input;
pub mod stat_card;
pub mod ui;

pub use card::{Card, CardContent, CardHeader};
pub use pagination_controls::PaginationControls;
pub use recent_card::RecentCard;
pub use search_input::SearchInput;
pub use stat_card::{StatCard, ValueFormat};
