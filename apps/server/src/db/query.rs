//! SQL query builder for facility listings.
//!
//! Builds the listing SQL from a [`FacilityFilter`]: filter predicates,
//! rating-descending order with a deterministic tie-break, and pagination.
//! User-derived values only ever travel through `$n` bind placeholders; the
//! SQL text itself never embeds request input.

use super::filter::FacilityFilter;

/// Bind values for `sqlx` queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    TextArray(Vec<String>),
    Float(f64),
}

fn push_text(bind_params: &mut Vec<BindValue>, value: String) -> usize {
    bind_params.push(BindValue::Text(value));
    bind_params.len()
}

fn push_text_array(bind_params: &mut Vec<BindValue>, value: Vec<String>) -> usize {
    bind_params.push(BindValue::TextArray(value));
    bind_params.len()
}

fn push_float(bind_params: &mut Vec<BindValue>, value: f64) -> usize {
    bind_params.push(BindValue::Float(value));
    bind_params.len()
}

/// Builds the facility listing query for one normalized filter.
#[derive(Debug)]
pub struct FacilityQuery<'a> {
    filter: &'a FacilityFilter,
}

impl<'a> FacilityQuery<'a> {
    pub fn new(filter: &'a FacilityFilter) -> Self {
        Self { filter }
    }

    /// Produce the SQL text and its bind values.
    ///
    /// `LIMIT`/`OFFSET` are inlined: they come from validated integers, never
    /// from raw request strings.
    pub fn build_sql(&self) -> (String, Vec<BindValue>) {
        let mut sql = String::from("SELECT f.* FROM facilities f");
        let mut bind_params = Vec::new();
        let mut clauses = Vec::new();

        if let Some(term) = &self.filter.treatment {
            // One bound pattern referenced by all three columns.
            let idx = push_text(&mut bind_params, format!("%{}%", term));
            clauses.push(format!(
                "(f.name ILIKE ${idx} OR f.specialty ILIKE ${idx} OR f.description ILIKE ${idx})"
            ));
        }

        if let Some(max_cost) = self.filter.max_cost {
            let idx = push_float(&mut bind_params, max_cost);
            clauses.push(format!("f.estimated_cost <= ${idx}"));
        }

        if !self.filter.regions.is_empty() {
            let idx = push_text_array(&mut bind_params, self.filter.regions.clone());
            clauses.push(format!("f.region = ANY(${idx})"));
        }

        if let Some(country) = &self.filter.country {
            let idx = push_text(&mut bind_params, country.clone());
            clauses.push(format!("f.country = ${idx}"));
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        // Deterministic ordering: rating first, row id as tie-break.
        sql.push_str(" ORDER BY f.rating DESC NULLS LAST, f.id ASC");

        sql.push_str(&format!(
            " LIMIT {} OFFSET {}",
            self.filter.limit, self.filter.offset
        ));

        (sql, bind_params)
    }
}
