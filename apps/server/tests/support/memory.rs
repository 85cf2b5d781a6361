//! In-memory store used to exercise the HTTP surface without PostgreSQL.
//!
//! Mirrors the SQL store's filtering, ordering and paging so router tests
//! observe the same behavior handlers see in production. Individual lookups
//! can be made to fail to test degraded responses.

use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::RwLock;

use async_trait::async_trait;
use salus::db::{FacilityFilter, FacilityStore};
use salus::error::{Error, Result};
use salus::models::{Doctor, Facility, Treatment};

#[derive(Default)]
pub struct MemoryFacilityStore {
    facilities: RwLock<Vec<Facility>>,
    treatments: RwLock<Vec<Treatment>>,
    doctors: RwLock<Vec<Doctor>>,
    fail_facilities: AtomicBool,
    fail_treatments: AtomicBool,
    fail_doctors: AtomicBool,
    fail_ping: AtomicBool,
}

impl MemoryFacilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_facility(&self, facility: Facility) {
        self.facilities.write().unwrap().push(facility);
    }

    pub fn insert_treatment(&self, treatment: Treatment) {
        self.treatments.write().unwrap().push(treatment);
    }

    pub fn insert_doctor(&self, doctor: Doctor) {
        self.doctors.write().unwrap().push(doctor);
    }

    /// Make facility queries fail with a database error.
    pub fn fail_facilities(&self) {
        self.fail_facilities.store(true, AtomicOrdering::SeqCst);
    }

    /// Make treatment lookups fail with a database error.
    pub fn fail_treatments(&self) {
        self.fail_treatments.store(true, AtomicOrdering::SeqCst);
    }

    /// Make doctor lookups fail with a database error.
    pub fn fail_doctors(&self) {
        self.fail_doctors.store(true, AtomicOrdering::SeqCst);
    }

    /// Make health pings fail with a database error.
    pub fn fail_ping(&self) {
        self.fail_ping.store(true, AtomicOrdering::SeqCst);
    }

    fn check(&self, flag: &AtomicBool) -> Result<()> {
        if flag.load(AtomicOrdering::SeqCst) {
            Err(Error::Database(sqlx::Error::PoolClosed))
        } else {
            Ok(())
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl FacilityStore for MemoryFacilityStore {
    async fn list_facilities(&self, filter: &FacilityFilter) -> Result<Vec<Facility>> {
        self.check(&self.fail_facilities)?;

        let mut matches: Vec<Facility> = self
            .facilities
            .read()
            .unwrap()
            .iter()
            .filter(|f| match &filter.treatment {
                Some(term) => {
                    contains_ci(&f.name, term)
                        || contains_ci(&f.specialty, term)
                        || contains_ci(&f.description, term)
                }
                None => true,
            })
            .filter(|f| match filter.max_cost {
                Some(max) => f.estimated_cost <= max,
                None => true,
            })
            .filter(|f| filter.regions.is_empty() || filter.regions.contains(&f.region))
            .filter(|f| match &filter.country {
                Some(country) => &f.country == country,
                None => true,
            })
            .cloned()
            .collect();

        matches.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.id.cmp(&b.id))
        });

        Ok(matches
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn get_facility(&self, id: i64) -> Result<Option<Facility>> {
        self.check(&self.fail_facilities)?;

        Ok(self
            .facilities
            .read()
            .unwrap()
            .iter()
            .find(|f| f.id == id)
            .cloned())
    }

    async fn list_treatments(&self, facility_id: i64) -> Result<Vec<Treatment>> {
        self.check(&self.fail_treatments)?;

        let mut matches: Vec<Treatment> = self
            .treatments
            .read()
            .unwrap()
            .iter()
            .filter(|t| t.facility_id == facility_id)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(matches)
    }

    async fn list_doctors(&self, facility_id: i64) -> Result<Vec<Doctor>> {
        self.check(&self.fail_doctors)?;

        let mut matches: Vec<Doctor> = self
            .doctors
            .read()
            .unwrap()
            .iter()
            .filter(|d| d.facility_id == facility_id)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(matches)
    }

    async fn ping(&self) -> Result<()> {
        self.check(&self.fail_ping)
    }
}
