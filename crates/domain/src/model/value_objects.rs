//! Derived records produced by queries; constructed per call and never mutated.

pub mod average_gaps;
pub mod short_info;

pub use average_gaps::AverageGapsInfo;
pub use short_info::DeliveryShortInfo;
