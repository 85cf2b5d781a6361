//! Service layer - orchestration between the API and the store

pub mod directory;
pub mod ranking;

pub use directory::{DirectoryService, FacilityDetail};
pub use ranking::rank_facilities;
