//! Static reference data for search UIs
//!
//! These lists change rarely, so they are compiled in rather than stored in
//! the database, and served with the same cache policy as facility lists.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::api::headers::CachePolicy;
use crate::error::Result;
use crate::state::AppState;

/// Region filter values and their display labels.
pub const REGIONS: [(&str, &str); 4] = [
    ("asia", "Asia (Thailand, India, Singapore, South Korea)"),
    ("europe", "Europe (Germany, Turkey, Czech Republic)"),
    ("americas", "Americas (Mexico, Costa Rica, Colombia)"),
    ("middle-east", "Middle East (UAE, Jordan, Israel)"),
];

/// Treatment names suggested to users before they type their own.
pub const POPULAR_TREATMENTS: [&str; 8] = [
    "Heart Surgery",
    "Hip Replacement",
    "Dental Implants",
    "Cosmetic Surgery",
    "Cancer Treatment",
    "Fertility Treatment",
    "Eye Surgery",
    "Spine Surgery",
];

/// GET /meta/regions
pub async fn list_regions(State(state): State<AppState>) -> Result<Response> {
    let regions: Vec<_> = REGIONS
        .iter()
        .map(|(value, label)| json!({ "value": value, "label": label }))
        .collect();

    let mut response = Json(json!({ "regions": regions })).into_response();
    CachePolicy::list(&state.config.cache).apply_to_response(&mut response);
    Ok(response)
}

/// GET /meta/treatments
pub async fn list_popular_treatments(State(state): State<AppState>) -> Result<Response> {
    let mut response = Json(json!({ "treatments": POPULAR_TREATMENTS })).into_response();
    CachePolicy::list(&state.config.cache).apply_to_response(&mut response);
    Ok(response)
}
