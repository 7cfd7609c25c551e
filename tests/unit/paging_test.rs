use delivery_query::{DeliveryQueries, PageRequest, QueryHelper, analytics};

use crate::common::{at_minutes, delivery, ids};

#[test]
fn pages_over_five_ordered_values() {
    let helper = QueryHelper;
    let values = vec![1, 2, 3, 4, 5];

    assert_eq!(helper.paging(values.clone(), |v| *v, None, PageRequest::new(2, 2)), vec![3, 4]);
    assert_eq!(helper.paging(values.clone(), |v| *v, None, PageRequest::new(3, 2)), vec![5]);
    assert!(helper.paging(values, |v| *v, None, PageRequest::new(10, 2)).is_empty());
}

#[test]
fn default_request_uses_first_page_of_hundred() {
    let values: Vec<usize> = (0..150).collect();
    let page = QueryHelper.paging(values, |v| *v, None, PageRequest::default());
    assert_eq!(page, (0..100).collect::<Vec<_>>());
}

#[test]
fn non_positive_parameters_give_empty_pages() {
    let values = vec![3, 1, 2];
    assert!(QueryHelper.paging(values.clone(), |v| *v, None, PageRequest::new(0, 10)).is_empty());
    assert!(QueryHelper.paging(values, |v| *v, None, PageRequest::new(1, 0)).is_empty());
}

#[test]
fn pages_deliveries_by_derived_key() {
    let deliveries: Vec<_> = (0..6)
        .map(|i| {
            let mut d = delivery(format!("d{i}")).build();
            d.loading_period.start = at_minutes(60 - i * 10);
            d
        })
        .collect();
    let late_only: &dyn Fn(&&delivery_query::Delivery) -> bool = &|d| d.loading_period.start > at_minutes(15);

    let page = QueryHelper.paging(&deliveries, |d| d.loading_period.start, Some(late_only), PageRequest::new(1, 2));
    assert_eq!(ids(page), vec!["d4", "d3"]);
}

#[test]
fn page_with_total_reports_page_count() {
    let page = analytics::paginate_with_total(1..=11, |v| *v, |_| true, PageRequest::new(3, 5));
    assert_eq!(page.items, vec![11]);
    assert_eq!(page.total_matching, 11);
    assert_eq!(page.total_pages(), 3);
}

#[test]
fn page_request_parses_from_spec_string() {
    let page: PageRequest = "2:3".parse().expect("valid spec");
    let result = QueryHelper.paging(vec![9, 8, 7, 6, 5, 4], |v| *v, None, page);
    assert_eq!(result, vec![7, 8, 9]);
}
