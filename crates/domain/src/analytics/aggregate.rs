use std::collections::{HashMap, HashSet};

use chrono::TimeDelta;

use crate::model::{AverageGapsInfo, Delivery, DeliveryStatus};

pub fn count_uniq_cargo_types<'a, I>(deliveries: I) -> usize
where
    I: IntoIterator<Item = &'a Delivery>,
{
    deliveries.into_iter().map(|d| &d.cargo_type).collect::<HashSet<_>>().len()
}

/// Number of deliveries per status. Statuses absent from the input get no entry.
pub fn counts_by_delivery_status<'a, I>(deliveries: I) -> HashMap<DeliveryStatus, usize>
where
    I: IntoIterator<Item = &'a Delivery>,
{
    let mut counts = HashMap::new();
    for delivery in deliveries {
        *counts.entry(delivery.status).or_insert(0) += 1;
    }
    counts
}

/// Mean travel gap per (origin, destination) pair, in first-seen route order.
///
/// Only deliveries with both a loading end and an arrival start take part.
/// Each gap contributes its minutes component alone (see [`gap_minutes`]).
pub fn average_travel_time_per_direction<'a, I>(deliveries: I) -> Vec<AverageGapsInfo>
where
    I: IntoIterator<Item = &'a Delivery>,
{
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut routes: Vec<((&str, &str), i64, usize)> = Vec::new();

    for delivery in deliveries {
        let Some(gap) = delivery.travel_gap() else {
            continue;
        };
        let key = (delivery.origin_city(), delivery.destination_city());
        let slot = *index.entry(key).or_insert_with(|| {
            routes.push((key, 0, 0));
            routes.len() - 1
        });
        let (_, total, count) = &mut routes[slot];
        *total += gap_minutes(gap);
        *count += 1;
    }

    routes
        .into_iter()
        .map(|((start, end), total, count)| AverageGapsInfo::new(start, end, total as f64 / count as f64))
        .collect()
}

/// Minutes component of a gap: whole minutes truncated toward zero, modulo one hour.
/// Hours and days are discarded and the sign follows the gap.
#[inline]
pub fn gap_minutes(gap: TimeDelta) -> i64 {
    gap.num_minutes() % 60
}
