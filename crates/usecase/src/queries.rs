use std::collections::HashMap;

use delivery_query_domain::{
    model::{AverageGapsInfo, Delivery, DeliveryShortInfo, DeliveryStatus, DeliveryType},
    options::PageRequest,
};
use delivery_query_shared_kernel::ClientId;

/// Read-only queries over a sequence of deliveries.
///
/// Inputs are any iterable of borrowed deliveries, so the iterator returned by
/// one filter can feed the next call directly. No operation fails: empty or
/// non-matching input produces an empty or zero result.
pub trait DeliveryQueries {
    /// Deliveries that have a payment attached.
    fn paid<'a, I>(&self, deliveries: I) -> impl Iterator<Item = &'a Delivery>
    where
        I: IntoIterator<Item = &'a Delivery>;

    /// Deliveries still in the system (not done, not cancelled).
    fn not_finished<'a, I>(&self, deliveries: I) -> impl Iterator<Item = &'a Delivery>
    where
        I: IntoIterator<Item = &'a Delivery>;

    /// Short infos of all deliveries ordered by `client_id`.
    fn delivery_infos_by_client<'a, I>(&self, deliveries: I, client_id: &ClientId) -> impl Iterator<Item = DeliveryShortInfo>
    where
        I: IntoIterator<Item = &'a Delivery>;

    /// First ten deliveries that start in `city_name` and have the given type.
    fn deliveries_by_city_and_type<'a, I>(
        &self,
        deliveries: I,
        city_name: &str,
        delivery_type: DeliveryType,
    ) -> impl Iterator<Item = &'a Delivery>
    where
        I: IntoIterator<Item = &'a Delivery>;

    fn order_by_status_then_by_start_loading<'a, I>(&self, deliveries: I) -> Vec<&'a Delivery>
    where
        I: IntoIterator<Item = &'a Delivery>;

    fn count_uniq_cargo_types<'a, I>(&self, deliveries: I) -> usize
    where
        I: IntoIterator<Item = &'a Delivery>;

    fn counts_by_delivery_status<'a, I>(&self, deliveries: I) -> HashMap<DeliveryStatus, usize>
    where
        I: IntoIterator<Item = &'a Delivery>;

    /// Average gap in minutes between end of loading and start of arrival,
    /// per (start city, end city) pair.
    fn average_travel_time_per_direction<'a, I>(&self, deliveries: I) -> Vec<AverageGapsInfo>
    where
        I: IntoIterator<Item = &'a Delivery>;

    /// Filters (all elements when `filter` is `None`), sorts ascending by
    /// `ordering` and returns the requested page.
    fn paging<T, K, I, O>(&self, elements: I, ordering: O, filter: Option<&dyn Fn(&T) -> bool>, page: PageRequest) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
        O: FnMut(&T) -> K,
        K: Ord;
}
