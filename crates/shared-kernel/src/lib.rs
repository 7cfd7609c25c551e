// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{DeliveryQueryError, DomainError, DomainResult, ErrorContext, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{ClientId, DeliveryId, PaymentId, Timestamp};
