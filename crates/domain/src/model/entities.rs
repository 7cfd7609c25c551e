pub mod delivery;
pub mod enums;

pub use delivery::{ArrivalPeriod, Delivery, DeliveryBuilder, Direction, LoadingPeriod, Location};
pub use enums::{CargoType, DeliveryStatus, DeliveryType};
