//! # Use Cases
//!
//! Application-level query surface over caller-owned delivery collections.
//!
//! - [`queries`]: the [`DeliveryQueries`] interface
//! - [`query_helper`]: [`QueryHelper`], the stateless implementation backed by
//!   the domain analytics
//!
//! Nothing here holds state or performs I/O; every call is a pure transformation.

#![allow(clippy::multiple_crate_versions)]

pub mod queries;
pub mod query_helper;

pub use queries::DeliveryQueries;
pub use query_helper::QueryHelper;
