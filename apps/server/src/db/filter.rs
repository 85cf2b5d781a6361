//! Facility list parameter normalization.
//!
//! Raw query parameters always arrive as strings (or not at all). This module
//! turns them into a typed [`FacilityFilter`] without executing anything.
//! Malformed numeric values are never an error: they silently fall back to
//! the default (where one exists) or to "no filter".

use serde::Deserialize;
use std::str::FromStr;

/// Allowance applied to a stated budget before comparing against
/// `estimated_cost`. Shared with display-side ranking so both agree on what
/// "within budget" means.
pub const BUDGET_HEADROOM: f64 = 1.2;

/// Page size when `limit` is absent or malformed.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Hard ceiling on page size. Larger requests are clamped, not rejected.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Raw query-string shape of `GET /facilities`.
///
/// Every field stays an `Option<String>`: typed numeric extraction would turn
/// `budget=abc` into a 400 before the leniency rules run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub treatment: Option<String>,
    pub budget: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Normalized filter/sort/pagination specification for a facility listing.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityFilter {
    /// Case-insensitive substring matched against name, specialty, and
    /// description (OR semantics). `None` when absent or empty.
    pub treatment: Option<String>,

    /// Inclusive upper bound on `estimated_cost`, already multiplied by
    /// [`BUDGET_HEADROOM`]. `None` when no parseable budget was supplied.
    pub max_cost: Option<f64>,

    /// "region is one of" membership filter. Empty means no region filter.
    pub regions: Vec<String>,

    /// Exact-match country filter.
    pub country: Option<String>,

    pub limit: u32,
    pub offset: u32,
}

impl Default for FacilityFilter {
    fn default() -> Self {
        Self {
            treatment: None,
            max_cost: None,
            regions: Vec::new(),
            country: None,
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl FacilityFilter {
    /// Normalize a raw parameter bag.
    ///
    /// Rules, in order:
    /// - `treatment`: kept verbatim when non-empty.
    /// - `budget`: parsed as a finite float, then multiplied by
    ///   [`BUDGET_HEADROOM`]; unparseable values mean no cost filter.
    /// - `region`: split on `,` with empty segments dropped.
    /// - `country`: kept verbatim when non-empty.
    /// - `limit`: parse-or-default to [`DEFAULT_PAGE_SIZE`], clamped to
    ///   [`MAX_PAGE_SIZE`].
    /// - `offset`: parse-or-default to 0.
    pub fn from_params(params: &ListParams) -> Self {
        let treatment = non_empty(params.treatment.as_deref());

        let max_cost = parse_finite_f64(params.budget.as_deref()).map(|b| b * BUDGET_HEADROOM);

        let regions = params
            .region
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let country = non_empty(params.country.as_deref());

        let limit = parse_or_default(params.limit.as_deref(), DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);
        let offset = parse_or_default(params.offset.as_deref(), 0);

        Self {
            treatment,
            max_cost,
            regions,
            country,
            limit,
            offset,
        }
    }
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(str::to_string)
}

/// Parse-or-default: the whole string must parse, otherwise the default wins.
fn parse_or_default<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// Like [`parse_or_default`] but with no default, and NaN/infinity rejected
/// (neither compares usefully against a cost column).
fn parse_finite_f64(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
