// crates/shared-kernel/src/value_objects/mod.rs
pub mod ids;

pub use ids::{ClientId, DeliveryId, PaymentId};

/// Point in time used for loading and arrival windows.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
