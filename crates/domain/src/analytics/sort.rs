// domain analytics sorting utilities
use crate::model::Delivery;

/// Orders by status ordinal, then by loading start. Equal keys keep input order.
pub fn order_by_status_then_by_start_loading<'a, I>(deliveries: I) -> Vec<&'a Delivery>
where
    I: IntoIterator<Item = &'a Delivery>,
{
    let mut sorted: Vec<&Delivery> = deliveries.into_iter().collect();
    sorted.sort_by(|a, b| {
        a.status
            .cmp(&b.status)
            .then_with(|| a.loading_period.start.cmp(&b.loading_period.start))
    });
    sorted
}
