//! Query helpers for in-memory collections of delivery records.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use delivery_query::{Delivery, DeliveryQueries, QueryHelper};
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
//! let deliveries = vec![
//!     Delivery::builder("d-1", "c-1", start).payment("p-1").build(),
//!     Delivery::builder("d-2", "c-1", start).build(),
//! ];
//!
//! let helper = QueryHelper;
//! let paid: Vec<_> = helper.paid(&deliveries).collect();
//! assert_eq!(paid.len(), 1);
//! ```
#![allow(clippy::multiple_crate_versions)]

pub use delivery_query_domain::{
    analytics::{self, Page},
    model::{
        ArrivalPeriod, AverageGapsInfo, CargoType, Delivery, DeliveryBuilder, DeliveryShortInfo, DeliveryStatus,
        DeliveryType, Direction, LoadingPeriod, Location,
    },
    options::{CITY_AND_TYPE_LIMIT, PageRequest},
};
pub use delivery_query_shared_kernel::{
    ClientId, DeliveryId, DeliveryQueryError, DomainError, DomainResult, ErrorContext, PaymentId, Result, Timestamp,
};
pub use delivery_query_usecase::{DeliveryQueries, QueryHelper};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
