use std::collections::HashMap;

use delivery_query_domain::{
    analytics,
    model::{AverageGapsInfo, Delivery, DeliveryShortInfo, DeliveryStatus, DeliveryType},
    options::PageRequest,
};
use delivery_query_shared_kernel::ClientId;
use log::{debug, warn};

use crate::queries::DeliveryQueries;

/// Stateless [`DeliveryQueries`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryHelper;

impl QueryHelper {
    pub const fn new() -> Self {
        Self
    }
}

impl DeliveryQueries for QueryHelper {
    fn paid<'a, I>(&self, deliveries: I) -> impl Iterator<Item = &'a Delivery>
    where
        I: IntoIterator<Item = &'a Delivery>,
    {
        analytics::paid(deliveries)
    }

    fn not_finished<'a, I>(&self, deliveries: I) -> impl Iterator<Item = &'a Delivery>
    where
        I: IntoIterator<Item = &'a Delivery>,
    {
        analytics::not_finished(deliveries)
    }

    fn delivery_infos_by_client<'a, I>(&self, deliveries: I, client_id: &ClientId) -> impl Iterator<Item = DeliveryShortInfo>
    where
        I: IntoIterator<Item = &'a Delivery>,
    {
        analytics::delivery_infos_by_client(deliveries, client_id)
    }

    fn deliveries_by_city_and_type<'a, I>(
        &self,
        deliveries: I,
        city_name: &str,
        delivery_type: DeliveryType,
    ) -> impl Iterator<Item = &'a Delivery>
    where
        I: IntoIterator<Item = &'a Delivery>,
    {
        analytics::deliveries_by_city_and_type(deliveries, city_name, delivery_type)
    }

    fn order_by_status_then_by_start_loading<'a, I>(&self, deliveries: I) -> Vec<&'a Delivery>
    where
        I: IntoIterator<Item = &'a Delivery>,
    {
        analytics::order_by_status_then_by_start_loading(deliveries)
    }

    fn count_uniq_cargo_types<'a, I>(&self, deliveries: I) -> usize
    where
        I: IntoIterator<Item = &'a Delivery>,
    {
        let count = analytics::count_uniq_cargo_types(deliveries);
        debug!("found {count} distinct cargo types");
        count
    }

    fn counts_by_delivery_status<'a, I>(&self, deliveries: I) -> HashMap<DeliveryStatus, usize>
    where
        I: IntoIterator<Item = &'a Delivery>,
    {
        let counts = analytics::counts_by_delivery_status(deliveries);
        debug!("grouped deliveries into {} statuses", counts.len());
        counts
    }

    fn average_travel_time_per_direction<'a, I>(&self, deliveries: I) -> Vec<AverageGapsInfo>
    where
        I: IntoIterator<Item = &'a Delivery>,
    {
        let averages = analytics::average_travel_time_per_direction(deliveries);
        debug!("computed average travel gap for {} directions", averages.len());
        averages
    }

    fn paging<T, K, I, O>(&self, elements: I, ordering: O, filter: Option<&dyn Fn(&T) -> bool>, page: PageRequest) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
        O: FnMut(&T) -> K,
        K: Ord,
    {
        if let Err(err) = page.validate() {
            warn!("returning empty page: {err}");
            return Vec::new();
        }
        match filter {
            Some(filter) => analytics::paginate_filtered(elements, ordering, filter, page),
            None => analytics::paginate(elements, ordering, page),
        }
    }
}
