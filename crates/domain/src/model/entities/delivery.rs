use chrono::TimeDelta;
use delivery_query_shared_kernel::{ClientId, DeliveryId, PaymentId, Timestamp};
use serde::{Deserialize, Serialize};

use super::enums::{CargoType, DeliveryStatus, DeliveryType};
use crate::model::value_objects::DeliveryShortInfo;

/// A city endpoint of a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
}

impl Location {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

/// Origin and destination of a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub origin: Location,
    pub destination: Location,
}

impl Direction {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self { origin: Location::new(origin), destination: Location::new(destination) }
    }
}

/// Loading window. The start is always known; the end is set once loading completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingPeriod {
    pub start: Timestamp,
    #[serde(default)]
    pub end: Option<Timestamp>,
}

/// Arrival window; both bounds stay empty until the cargo arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalPeriod {
    #[serde(default)]
    pub start: Option<Timestamp>,
    #[serde(default)]
    pub end: Option<Timestamp>,
}

/// A shipment record as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: DeliveryId,
    pub client_id: ClientId,
    #[serde(default)]
    pub payment_id: Option<PaymentId>,
    pub status: DeliveryStatus,
    #[serde(rename = "type")]
    pub delivery_type: DeliveryType,
    pub cargo_type: CargoType,
    pub direction: Direction,
    pub loading_period: LoadingPeriod,
    #[serde(default)]
    pub arrival_period: ArrivalPeriod,
}

impl Delivery {
    pub fn builder(id: impl Into<DeliveryId>, client_id: impl Into<ClientId>, loading_start: Timestamp) -> DeliveryBuilder {
        DeliveryBuilder::new(id, client_id, loading_start)
    }

    #[inline]
    pub fn is_paid(&self) -> bool {
        self.payment_id.is_some()
    }

    #[inline]
    pub fn origin_city(&self) -> &str {
        &self.direction.origin.city
    }

    #[inline]
    pub fn destination_city(&self) -> &str {
        &self.direction.destination.city
    }

    /// Time between the end of loading and the start of arrival, when both are known.
    pub fn travel_gap(&self) -> Option<TimeDelta> {
        let loaded = self.loading_period.end?;
        let arrived = self.arrival_period.start?;
        Some(arrived - loaded)
    }

    pub fn short_info(&self) -> DeliveryShortInfo {
        DeliveryShortInfo {
            id: self.id.clone(),
            start_city: self.direction.origin.city.clone(),
            end_city: self.direction.destination.city.clone(),
            client_id: self.client_id.clone(),
            delivery_type: self.delivery_type,
            loading_period: self.loading_period,
            arrival_period: self.arrival_period,
            status: self.status,
            cargo_type: self.cargo_type.clone(),
        }
    }
}

pub struct DeliveryBuilder {
    id: DeliveryId,
    client_id: ClientId,
    payment_id: Option<PaymentId>,
    status: DeliveryStatus,
    delivery_type: DeliveryType,
    cargo_type: CargoType,
    direction: Direction,
    loading_period: LoadingPeriod,
    arrival_period: ArrivalPeriod,
}

impl DeliveryBuilder {
    pub fn new(id: impl Into<DeliveryId>, client_id: impl Into<ClientId>, loading_start: Timestamp) -> Self {
        Self {
            id: id.into(),
            client_id: client_id.into(),
            payment_id: None,
            status: DeliveryStatus::Pending,
            delivery_type: DeliveryType::Standard,
            cargo_type: CargoType::new("General"),
            direction: Direction::new("", ""),
            loading_period: LoadingPeriod { start: loading_start, end: None },
            arrival_period: ArrivalPeriod::default(),
        }
    }

    pub fn payment(mut self, payment_id: impl Into<PaymentId>) -> Self {
        self.payment_id = Some(payment_id.into());
        self
    }

    pub fn status(mut self, status: DeliveryStatus) -> Self {
        self.status = status;
        self
    }

    pub fn delivery_type(mut self, delivery_type: DeliveryType) -> Self {
        self.delivery_type = delivery_type;
        self
    }

    pub fn cargo_type(mut self, cargo_type: impl Into<CargoType>) -> Self {
        self.cargo_type = cargo_type.into();
        self
    }

    pub fn route(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.direction = Direction::new(origin, destination);
        self
    }

    pub fn loading_end(mut self, end: Timestamp) -> Self {
        self.loading_period.end = Some(end);
        self
    }

    pub fn arrival_start(mut self, start: Timestamp) -> Self {
        self.arrival_period.start = Some(start);
        self
    }

    pub fn arrival_end(mut self, end: Timestamp) -> Self {
        self.arrival_period.end = Some(end);
        self
    }

    pub fn build(self) -> Delivery {
        Delivery {
            id: self.id,
            client_id: self.client_id,
            payment_id: self.payment_id,
            status: self.status,
            delivery_type: self.delivery_type,
            cargo_type: self.cargo_type,
            direction: self.direction,
            loading_period: self.loading_period,
            arrival_period: self.arrival_period,
        }
    }
}
