//! HTTP response header helpers
//!
//! Cache directives for the read endpoints. Listings change whenever the
//! external admin process edits rows, so they get a short shared-cache
//! lifetime with a longer stale-while-revalidate window; detail pages
//! tolerate twice that.

use crate::config::CacheConfig;
use axum::http::{header, HeaderValue};
use axum::response::Response;

/// Shared-cache policy attached to successful read responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub max_age: u32,
    pub stale_while_revalidate: u32,
}

impl CachePolicy {
    /// Policy for facility listings and reference data.
    pub fn list(config: &CacheConfig) -> Self {
        Self {
            max_age: config.list_max_age_seconds,
            stale_while_revalidate: config.list_stale_seconds,
        }
    }

    /// Policy for facility detail pages.
    pub fn detail(config: &CacheConfig) -> Self {
        Self {
            max_age: config.detail_max_age_seconds,
            stale_while_revalidate: config.detail_stale_seconds,
        }
    }

    /// Render as a `Cache-Control` header value.
    pub fn header_value(&self) -> String {
        format!(
            "public, s-maxage={}, stale-while-revalidate={}",
            self.max_age, self.stale_while_revalidate
        )
    }

    /// Attach the policy to a response, replacing any existing directive.
    pub fn apply_to_response(&self, response: &mut Response) {
        if let Ok(value) = HeaderValue::from_str(&self.header_value()) {
            response.headers_mut().insert(header::CACHE_CONTROL, value);
        }
    }
}
