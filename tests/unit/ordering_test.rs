use delivery_query::{DeliveryQueries, DeliveryStatus, QueryHelper};

use crate::common::{at_minutes, delivery, ids};

#[test]
fn orders_by_status_ordinal_then_loading_start() {
    let make = |id: &str, status, minutes| {
        let mut d = delivery(id).status(status).build();
        d.loading_period.start = at_minutes(minutes);
        d
    };
    let deliveries = vec![
        make("cancelled", DeliveryStatus::Cancelled, 0),
        make("pending-late", DeliveryStatus::Pending, 90),
        make("done", DeliveryStatus::Done, 10),
        make("pending-early", DeliveryStatus::Pending, 5),
        make("moving", DeliveryStatus::InProgress, 1),
    ];

    let sorted = QueryHelper.order_by_status_then_by_start_loading(&deliveries);
    assert_eq!(ids(sorted), vec!["pending-early", "pending-late", "moving", "done", "cancelled"]);
}

#[test]
fn equal_keys_keep_input_order() {
    let deliveries: Vec<_> = ["x", "y", "z"].into_iter().map(|id| delivery(id).build()).collect();
    let sorted = QueryHelper.order_by_status_then_by_start_loading(&deliveries);
    assert_eq!(ids(sorted), vec!["x", "y", "z"]);
}

#[test]
fn input_is_left_untouched() {
    let deliveries = vec![
        delivery("b").status(DeliveryStatus::Done).build(),
        delivery("a").status(DeliveryStatus::Pending).build(),
    ];
    let snapshot = deliveries.clone();

    let _ = QueryHelper.order_by_status_then_by_start_loading(&deliveries);
    assert_eq!(deliveries, snapshot);
}
