pub mod entities;
pub mod value_objects;

pub use entities::{
    ArrivalPeriod, CargoType, Delivery, DeliveryBuilder, DeliveryStatus, DeliveryType, Direction, LoadingPeriod,
    Location,
};
pub use value_objects::{AverageGapsInfo, DeliveryShortInfo};
