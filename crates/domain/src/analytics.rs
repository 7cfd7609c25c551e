//! Pure query operations over borrowed delivery sequences.
//!
//! Filters stay lazy and hand back iterators so calls compose; sorting,
//! grouping and paging collect because they need the whole input.

pub mod aggregate;
pub mod filter;
pub mod paging;
pub mod sort;

pub use aggregate::{average_travel_time_per_direction, count_uniq_cargo_types, counts_by_delivery_status};
pub use filter::{deliveries_by_city_and_type, delivery_infos_by_client, not_finished, paid};
pub use paging::{Page, paginate, paginate_filtered, paginate_with_total};
pub use sort::order_by_status_then_by_start_loading;
