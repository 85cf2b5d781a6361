//! Facility endpoints
//!
//! `GET /facilities` lists facilities matching the caller's filters and
//! `GET /facilities/:id` returns one facility together with its treatments
//! and doctors.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::headers::CachePolicy;
use crate::db::ListParams;
use crate::error::{Error, Result};
use crate::models::Facility;
use crate::state::AppState;

/// Response body for the facility list endpoint.
#[derive(Debug, Serialize)]
pub struct FacilityListResponse {
    pub facilities: Vec<Facility>,
    /// Number of facilities in this page, not the total match count.
    pub count: usize,
}

/// GET /facilities
///
/// All query parameters are optional strings. Malformed numeric values fall
/// back to their defaults rather than rejecting the request.
pub async fn list_facilities(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response> {
    let facilities = state.directory.list(&params).await?;
    let count = facilities.len();

    let body = Json(FacilityListResponse { facilities, count });
    let mut response = body.into_response();
    CachePolicy::list(&state.config.cache).apply_to_response(&mut response);
    Ok(response)
}

/// GET /facilities/:id
///
/// The id must be a decimal integer; anything else is a 400. A missing
/// facility is a 404. Failures loading treatments or doctors degrade to
/// empty lists so the facility itself still renders.
pub async fn get_facility(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let facility_id: i64 = id.parse().map_err(|_| Error::InvalidId(id.clone()))?;

    let detail = state.directory.detail(facility_id).await?;

    let mut response = Json(detail).into_response();
    CachePolicy::detail(&state.config.cache).apply_to_response(&mut response);
    Ok(response)
}
