use delivery_query::{ClientId, Delivery, DeliveryQueries, DeliveryStatus, DeliveryType, QueryHelper};

use crate::common::{delivery, epoch, express_from, ids};

#[test]
fn paid_ignores_missing_payment_ids() {
    let deliveries = vec![
        delivery("unpaid").build(),
        delivery("paid-1").payment("pay-1").build(),
        delivery("paid-2").payment("pay-2").build(),
    ];

    assert_eq!(ids(QueryHelper.paid(&deliveries)), vec!["paid-1", "paid-2"]);
}

#[test]
fn not_finished_keeps_pending_and_in_progress() {
    let deliveries = vec![
        delivery("done").status(DeliveryStatus::Done).build(),
        delivery("pending").status(DeliveryStatus::Pending).build(),
        delivery("cancelled").status(DeliveryStatus::Cancelled).build(),
        delivery("moving").status(DeliveryStatus::InProgress).build(),
    ];

    assert_eq!(ids(QueryHelper.not_finished(&deliveries)), vec!["pending", "moving"]);
}

#[test]
fn empty_input_yields_empty_filters() {
    let helper = QueryHelper;
    let none: Vec<Delivery> = Vec::new();
    assert_eq!(helper.paid(&none).count(), 0);
    assert_eq!(helper.not_finished(&none).count(), 0);
    assert_eq!(helper.delivery_infos_by_client(&none, &ClientId::from("x")).count(), 0);
    assert_eq!(helper.deliveries_by_city_and_type(&none, "Kyiv", DeliveryType::Express).count(), 0);
}

#[test]
fn client_infos_carry_projection_fields() {
    let deliveries = vec![
        delivery("a").route("Kyiv", "Odesa").cargo_type("Grain").build(),
        Delivery::builder("b", "other", epoch()).build(),
    ];

    let infos: Vec<_> = QueryHelper.delivery_infos_by_client(&deliveries, &ClientId::from("client-1")).collect();
    assert_eq!(infos.len(), 1);
    let info = &infos[0];
    assert_eq!(info.id.as_str(), "a");
    assert_eq!(info.start_city, "Kyiv");
    assert_eq!(info.end_city, "Odesa");
    assert_eq!(info.cargo_type.as_str(), "Grain");
    assert_eq!(info.loading_period, deliveries[0].loading_period);
}

#[test]
fn city_and_type_returns_first_ten_kyiv_express() {
    let deliveries = express_from("Kyiv", 12);

    let found = ids(QueryHelper.deliveries_by_city_and_type(&deliveries, "Kyiv", DeliveryType::Express));
    assert_eq!(found.len(), 10);
    assert_eq!(found, ids(&deliveries[..10]));
}

#[test]
fn city_and_type_is_case_sensitive_and_type_strict() {
    let deliveries = express_from("Kyiv", 3);
    assert_eq!(QueryHelper.deliveries_by_city_and_type(&deliveries, "kyiv", DeliveryType::Express).count(), 0);
    assert_eq!(QueryHelper.deliveries_by_city_and_type(&deliveries, "Kyiv", DeliveryType::Standard).count(), 0);
}
