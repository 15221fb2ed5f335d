use contracts::domain::customer::Customer;
use contracts::domain::order::Order;
use contracts::domain::product::Product;
use contracts::domain::warehouse::Warehouse;
use contracts::shared::Pagination;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Entities addressable by their server-assigned numeric id.
pub trait Keyed {
    fn key(&self) -> i64;
}

impl Keyed for Customer {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Product {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Warehouse {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Order {
    fn key(&self) -> i64 {
        self.order_id
    }
}

/// Per-domain slice: `{list, pagination, status, error}`.
pub struct DomainStore<T: Send + Sync + 'static> {
    pub list: RwSignal<Vec<T>>,
    pub pagination: RwSignal<Pagination>,
    pub status: RwSignal<LoadStatus>,
    pub error: RwSignal<Option<String>>,
}

// Signal handles are Copy regardless of `T`; a derive would demand
// `T: Copy`.
impl<T: Send + Sync + 'static> Clone for DomainStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DomainStore<T> {}

impl<T: Clone + Send + Sync + 'static> DomainStore<T> {
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(Vec::new()),
            pagination: RwSignal::new(Pagination::default()),
            status: RwSignal::new(LoadStatus::Idle),
            error: RwSignal::new(None),
        }
    }

    /// Pending transition: a fetch is in flight.
    pub fn start(&self) {
        self.status.set(LoadStatus::Loading);
        self.error.set(None);
    }

    /// Fulfilled transition for list-replacing fetches.
    pub fn loaded(&self, rows: Vec<T>, pagination: Pagination) {
        self.list.set(rows);
        self.pagination.set(pagination);
        self.status.set(LoadStatus::Succeeded);
    }

    /// Rejected transition; the previous list is left in place.
    pub fn failed(&self, message: String) {
        self.status.set(LoadStatus::Failed);
        self.error.set(Some(message));
    }

    /// A successful create appends.
    pub fn created(&self, item: T) {
        self.list.update(|rows| rows.push(item));
        self.status.set(LoadStatus::Succeeded);
    }
}

impl<T: Clone + Keyed + Send + Sync + 'static> DomainStore<T> {
    /// A successful update replaces by id.
    pub fn updated(&self, item: T) {
        self.list.update(|rows| {
            if let Some(slot) = rows.iter_mut().find(|row| row.key() == item.key()) {
                *slot = item;
            }
        });
        self.status.set(LoadStatus::Succeeded);
    }

    /// A successful delete filters by id.
    pub fn removed(&self, id: i64) {
        self.list.update(|rows| rows.retain(|row| row.key() != id));
        self.status.set(LoadStatus::Succeeded);
    }
}

impl<T: Clone + Send + Sync + 'static> Default for DomainStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// All four domain stores, provided once via context in `app.rs`.
#[derive(Clone, Copy)]
pub struct AppStores {
    pub customers: DomainStore<Customer>,
    pub products: DomainStore<Product>,
    pub orders: DomainStore<Order>,
    pub warehouses: DomainStore<Warehouse>,
}

impl AppStores {
    pub fn new() -> Self {
        Self {
            customers: DomainStore::new(),
            products: DomainStore::new(),
            orders: DomainStore::new(),
            warehouses: DomainStore::new(),
        }
    }
}

impl Default for AppStores {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to reach the stores from any component.
pub fn use_stores() -> AppStores {
    use_context::<AppStores>().expect("AppStores context not found")
}
