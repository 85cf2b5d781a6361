//! Directory service - read orchestration between handlers and the store
//!
//! Owns the two read flows of the API:
//! - listing: normalize the raw parameter bag, then run one filtered read
//! - detail: fan out three independent reads (facility, treatments, doctors)
//!   and join before branching

use crate::{
    db::{
        filter::{FacilityFilter, ListParams},
        traits::FacilityStore,
    },
    models::{Doctor, Facility, Treatment},
    Error, Result,
};
use serde::Serialize;
use std::sync::Arc;

/// Everything the detail page needs for one facility.
#[derive(Debug, Clone, Serialize)]
pub struct FacilityDetail {
    pub facility: Facility,
    pub treatments: Vec<Treatment>,
    pub doctors: Vec<Doctor>,
}

/// Coordinates directory reads over an injected [`FacilityStore`].
#[derive(Clone)]
pub struct DirectoryService {
    store: Arc<dyn FacilityStore>,
}

impl DirectoryService {
    pub fn new(store: Arc<dyn FacilityStore>) -> Self {
        Self { store }
    }

    /// Run a filtered, paginated facility listing.
    pub async fn list(&self, params: &ListParams) -> Result<Vec<Facility>> {
        let filter = FacilityFilter::from_params(params);
        self.store.list_facilities(&filter).await
    }

    /// Fetch one facility with its treatments and doctors.
    ///
    /// The three reads run concurrently and are all awaited before any
    /// branching. A missing facility is [`Error::NotFound`]; a failed
    /// facility read is fatal. Treatment/doctor read failures only degrade
    /// their list to empty - the detail page still renders without them.
    pub async fn detail(&self, id: i64) -> Result<FacilityDetail> {
        let (facility, treatments, doctors) = tokio::join!(
            self.store.get_facility(id),
            self.store.list_treatments(id),
            self.store.list_doctors(id),
        );

        let facility = facility?.ok_or_else(|| Error::NotFound(format!("facility {id}")))?;

        let treatments = treatments.unwrap_or_else(|e| {
            tracing::warn!(facility_id = id, error = %e, "Treatment lookup failed, returning empty list");
            Vec::new()
        });
        let doctors = doctors.unwrap_or_else(|e| {
            tracing::warn!(facility_id = id, error = %e, "Doctor lookup failed, returning empty list");
            Vec::new()
        });

        Ok(FacilityDetail {
            facility,
            treatments,
            doctors,
        })
    }
}
