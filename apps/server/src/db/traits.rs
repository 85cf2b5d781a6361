//! Core trait for facility directory storage backends

use crate::{
    db::filter::FacilityFilter,
    models::{Doctor, Facility, Treatment},
    Result,
};
use async_trait::async_trait;

/// Read-only storage capability backing the directory.
///
/// The production backend is PostgreSQL ([`super::store::PgFacilityStore`]);
/// the integration test suite runs the router against an in-memory
/// implementation. Anything that can answer these five reads can serve the
/// API.
#[async_trait]
pub trait FacilityStore: Send + Sync {
    /// List facilities matching `filter`, ordered by rating descending
    /// (row id as tie-break), restricted to the filter's row range.
    async fn list_facilities(&self, filter: &FacilityFilter) -> Result<Vec<Facility>>;

    /// Fetch a single facility by id.
    ///
    /// # Returns
    /// * `Ok(Some(facility))` - row exists
    /// * `Ok(None)` - no facility with that id
    async fn get_facility(&self, id: i64) -> Result<Option<Facility>>;

    /// All treatments offered by a facility, ordered by name.
    ///
    /// An unknown `facility_id` is not an error; the list is simply empty.
    async fn list_treatments(&self, facility_id: i64) -> Result<Vec<Treatment>>;

    /// All doctors affiliated with a facility, ordered by name.
    ///
    /// An unknown `facility_id` is not an error; the list is simply empty.
    async fn list_doctors(&self, facility_id: i64) -> Result<Vec<Doctor>>;

    /// Connectivity probe for health reporting.
    async fn ping(&self) -> Result<()>;
}
