//! Display-side facility ranking.
//!
//! The store already filters and orders listings by rating. Consumers
//! re-sort a fetched page with a two-key comparator: facilities within the
//! user's budget first, rating descending second. "Within budget" applies
//! the same headroom rule as the listing filter ([`BUDGET_HEADROOM`]), so
//! the two stay in agreement.

use crate::db::filter::BUDGET_HEADROOM;
use crate::models::Facility;
use std::cmp::Ordering;

/// Re-order facilities for display: within-budget first, then rating
/// descending.
///
/// The sort is stable, so facilities with equal rank keep their incoming
/// relative order. The input slice is not touched; a new ordering is
/// returned. With no budget every facility counts as within budget and the
/// comparator degenerates to rating-descending.
pub fn rank_facilities(facilities: &[Facility], budget: Option<f64>) -> Vec<Facility> {
    let mut ranked = facilities.to_vec();
    ranked.sort_by(|a, b| {
        let a_within = within_budget(a, budget);
        let b_within = within_budget(b, budget);
        b_within
            .cmp(&a_within)
            .then_with(|| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal))
    });
    ranked
}

fn within_budget(facility: &Facility, budget: Option<f64>) -> bool {
    match budget {
        Some(budget) => facility.estimated_cost <= budget * BUDGET_HEADROOM,
        None => true,
    }
}
