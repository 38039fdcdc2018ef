//! Query parameter types for API handlers.

use roster_db::models::student::StudentFilter;
use serde::Deserialize;

/// `GET /students?country=&age=`. Both optional.
#[derive(Debug, Default, Deserialize)]
pub struct StudentListParams {
    /// Exact `address.country` match. An empty string means no constraint.
    pub country: Option<String>,
    /// Minimum age, inclusive.
    pub age: Option<i64>,
}

impl StudentListParams {
    pub fn into_filter(self) -> StudentFilter {
        StudentFilter {
            country: self.country.filter(|c| !c.is_empty()),
            min_age: self.age,
        }
    }
}
