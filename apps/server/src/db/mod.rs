//! Database layer - filter normalization, query building, and data access

pub mod filter;
pub mod query;
pub mod store;
pub mod traits;

pub use filter::{FacilityFilter, ListParams};
pub use query::{BindValue, FacilityQuery};
pub use store::PgFacilityStore;
pub use traits::FacilityStore;
