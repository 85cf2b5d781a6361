//! HTTP request handlers

pub mod facilities;
pub mod meta;
