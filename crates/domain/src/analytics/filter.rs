use delivery_query_shared_kernel::ClientId;

use crate::{
    model::{Delivery, DeliveryShortInfo, DeliveryType},
    options::CITY_AND_TYPE_LIMIT,
};

pub fn paid<'a, I>(deliveries: I) -> impl Iterator<Item = &'a Delivery>
where
    I: IntoIterator<Item = &'a Delivery>,
{
    deliveries.into_iter().filter(|d| d.is_paid())
}

/// Deliveries still being processed, i.e. neither done nor cancelled.
pub fn not_finished<'a, I>(deliveries: I) -> impl Iterator<Item = &'a Delivery>
where
    I: IntoIterator<Item = &'a Delivery>,
{
    deliveries.into_iter().filter(|d| !d.status.is_finished())
}

pub fn delivery_infos_by_client<'a, I>(deliveries: I, client_id: &ClientId) -> impl Iterator<Item = DeliveryShortInfo>
where
    I: IntoIterator<Item = &'a Delivery>,
{
    deliveries.into_iter().filter(move |d| d.client_id == *client_id).map(Delivery::short_info)
}

/// First [`CITY_AND_TYPE_LIMIT`] deliveries leaving `city` with the given type, in input order.
pub fn deliveries_by_city_and_type<'a, I>(
    deliveries: I,
    city: &str,
    delivery_type: DeliveryType,
) -> impl Iterator<Item = &'a Delivery>
where
    I: IntoIterator<Item = &'a Delivery>,
{
    deliveries
        .into_iter()
        .filter(move |d| d.origin_city() == city && d.delivery_type == delivery_type)
        .take(CITY_AND_TYPE_LIMIT)
}
