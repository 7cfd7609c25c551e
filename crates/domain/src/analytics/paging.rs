use serde::Serialize;

use crate::options::PageRequest;

/// One slice of an ordered, filtered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: usize,
    pub count_on_page: usize,
    /// Elements that passed the filter, before slicing.
    pub total_matching: usize,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        if self.count_on_page == 0 { 0 } else { self.total_matching.div_ceil(self.count_on_page) }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Sorts `elements` ascending by `ordering` and returns the requested page.
pub fn paginate<T, K, I, O>(elements: I, ordering: O, page: PageRequest) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    O: FnMut(&T) -> K,
    K: Ord,
{
    paginate_filtered(elements, ordering, |_| true, page)
}

/// Like [`paginate`], keeping only elements accepted by `filter`.
///
/// The sort is stable. A page past the end, a zero page number or a zero page
/// size all yield an empty page.
pub fn paginate_filtered<T, K, I, O, F>(elements: I, ordering: O, filter: F, page: PageRequest) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    O: FnMut(&T) -> K,
    K: Ord,
    F: FnMut(&T) -> bool,
{
    paginate_with_total(elements, ordering, filter, page).items
}

pub fn paginate_with_total<T, K, I, O, F>(elements: I, ordering: O, filter: F, page: PageRequest) -> Page<T>
where
    I: IntoIterator<Item = T>,
    O: FnMut(&T) -> K,
    K: Ord,
    F: FnMut(&T) -> bool,
{
    let mut matching: Vec<T> = elements.into_iter().filter(filter).collect();
    let total_matching = matching.len();

    let items = match page.offset() {
        Some(offset) if offset < total_matching => {
            matching.sort_by_key(ordering);
            matching.into_iter().skip(offset).take(page.count_on_page).collect()
        }
        _ => Vec::new(),
    };

    Page { items, page_number: page.page_number, count_on_page: page.count_on_page, total_matching }
}
