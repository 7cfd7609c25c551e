use delivery_query_shared_kernel::{ClientId, DeliveryId};
use serde::{Deserialize, Serialize};

use crate::model::entities::{ArrivalPeriod, CargoType, DeliveryStatus, DeliveryType, LoadingPeriod};

/// Flattened view of a delivery with the route reduced to its two cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryShortInfo {
    pub id: DeliveryId,
    pub start_city: String,
    pub end_city: String,
    pub client_id: ClientId,
    #[serde(rename = "type")]
    pub delivery_type: DeliveryType,
    pub loading_period: LoadingPeriod,
    pub arrival_period: ArrivalPeriod,
    pub status: DeliveryStatus,
    pub cargo_type: CargoType,
}
