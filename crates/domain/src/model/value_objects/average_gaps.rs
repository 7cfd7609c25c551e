use serde::{Deserialize, Serialize};

/// Mean gap, in minutes, between end of loading and start of arrival for one route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageGapsInfo {
    pub start_city: String,
    pub end_city: String,
    pub average_gap: f64,
}

impl AverageGapsInfo {
    pub fn new(start_city: impl Into<String>, end_city: impl Into<String>, average_gap: f64) -> Self {
        Self { start_city: start_city.into(), end_city: end_city.into(), average_gap }
    }
}
