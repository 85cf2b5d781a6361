//! Domain models for the facility directory
//!
//! Row types mirror the `facilities`, `treatments`, and `doctors` tables.
//! All three are read-only from this server's point of view; writes happen
//! through an external administrative process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A medical facility (hospital or clinic) listed in the directory.
///
/// `Facility` is the aggregate root: treatments and doctors belong to
/// exactly one facility and are only ever read through it.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Facility {
    /// Row ID (positive, immutable once assigned)
    pub id: i64,

    pub name: String,

    /// City/area shown in listings (e.g. "Bangkok, Thailand")
    pub location: String,

    pub country: String,

    /// Browse region slug (e.g. "asia", "europe")
    pub region: String,

    /// Primary medical specialty
    pub specialty: String,

    /// Aggregate rating on a 0-5 scale, higher is better
    pub rating: f64,

    pub review_count: i32,

    /// Accreditation labels (JCI, ISO, ...); order not significant
    pub accreditation: Vec<String>,

    /// Display string, e.g. "$8,000 - $12,000"
    pub price_range: String,

    /// Typical procedure cost used for budget filtering and ranking
    pub estimated_cost: f64,

    /// Languages spoken by staff, in display order
    pub languages: Vec<String>,

    /// Display string, e.g. "2-3 weeks"
    pub wait_time: String,

    pub description: String,

    pub contact_phone: String,
    pub contact_email: String,
    pub contact_website: String,
    pub address: String,

    /// Founding year as displayed (free-form)
    pub established: String,

    /// Bed count as displayed (free-form)
    pub beds: String,

    pub departments: Vec<String>,

    /// Gallery URLs; the first entry is the hero image
    pub image_urls: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A procedure offered by a facility.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Treatment {
    pub id: i64,

    /// Owning facility
    pub facility_id: i64,

    pub name: String,

    /// Display string, e.g. "$3,500 - $5,000"
    pub price_range: String,

    /// Procedure duration as displayed
    pub duration: String,

    /// Recovery time as displayed
    pub recovery: String,

    pub description: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A practitioner affiliated with a facility.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Doctor {
    pub id: i64,

    /// Owning facility
    pub facility_id: i64,

    pub name: String,

    pub specialty: String,

    /// Years of practice as displayed (free-form)
    pub experience: String,

    pub education: String,

    /// Languages spoken, in display order
    pub languages: Vec<String>,

    pub image_url: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
