//! Injectable client-side state containers.
//!
//! One [`DomainStore`] per domain holds the fetched list, its pagination
//! metadata and the async status. Stores are only ever mutated from the
//! completion of an API call; the typed transition methods below are the
//! full set of allowed mutations.

pub mod domain_store;

pub use domain_store::{use_stores, AppStores, DomainStore, Keyed, LoadStatus};
