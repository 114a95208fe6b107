//! Client-side search, categorical filtering and pagination over a fetched
//! collection.
//!
//! A page keeps one [`ViewState`] and changes it only through
//! [`ViewState::reduce`]. Whenever the search text or a filter actually
//! changes, the page index goes back to 1.

use std::fmt::Debug;

/// A categorical filter an entity can be narrowed by.
pub trait Facet: Copy + Eq + Debug + 'static {
    /// Every facet of the entity, in display order.
    const ALL: &'static [Self];

    /// Select value meaning "do not filter on this facet".
    fn sentinel(self) -> &'static str;
}

/// Facet type for entities that are only searched and paginated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoFacet {}

impl Facet for NoFacet {
    const ALL: &'static [Self] = &[];

    fn sentinel(self) -> &'static str {
        match self {}
    }
}

/// An entity that can be shown on a listing page.
pub trait Filterable {
    type Facet: Facet;

    const PAGE_SIZE: usize;

    /// Fields the search box matches against.
    fn search_fields(&self) -> Vec<&str>;

    /// The item's value for a facet, compared exactly with the selection.
    fn facet_value(&self, facet: Self::Facet) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction<F> {
    SetSearch(String),
    SetFilter(F, String),
    /// Pages are 1-based; 0 is treated as 1.
    SetPage(usize),
    Reset,
}

/// Where the view is relative to the unfiltered first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// No search, every filter at its sentinel, first page.
    Idle,
    /// Search or filters active, first page.
    Filtering,
    Paginating,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState<F: Facet> {
    search: String,
    filters: Vec<(F, String)>,
    page: usize,
}

impl<F: Facet> Default for ViewState<F> {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: F::ALL
                .iter()
                .map(|facet| (*facet, facet.sentinel().to_string()))
                .collect(),
            page: 1,
        }
    }
}

impl<F: Facet> ViewState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Current selection for a facet.
    pub fn filter(&self, facet: F) -> &str {
        self.filters
            .iter()
            .find(|(f, _)| *f == facet)
            .map(|(_, value)| value.as_str())
            .unwrap_or_else(|| facet.sentinel())
    }

    /// Apply an action. Returns whether anything changed.
    pub fn reduce(&mut self, action: ViewAction<F>) -> bool {
        let before = self.clone();
        match action {
            ViewAction::SetSearch(search) => {
                if search != self.search {
                    self.search = search;
                    self.page = 1;
                }
            }
            ViewAction::SetFilter(facet, value) => {
                match self.filters.iter().position(|(f, _)| *f == facet) {
                    Some(i) if self.filters[i].1 == value => {}
                    Some(i) => {
                        self.filters[i].1 = value;
                        self.page = 1;
                    }
                    None => {
                        self.filters.push((facet, value));
                        self.page = 1;
                    }
                }
            }
            ViewAction::SetPage(page) => self.page = page.max(1),
            ViewAction::Reset => *self = Self::default(),
        }
        *self != before
    }

    pub fn phase(&self) -> ViewPhase {
        if self.page > 1 {
            ViewPhase::Paginating
        } else if self.search.is_empty()
            && self.filters.iter().all(|(f, v)| v == f.sentinel())
        {
            ViewPhase::Idle
        } else {
            ViewPhase::Filtering
        }
    }

    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Filterable<Facet = F>,
    {
        self.matches_search(item)
            && self.filters.iter().all(|(facet, value)| {
                value == facet.sentinel() || item.facet_value(*facet) == value
            })
    }

    fn matches_search<T: Filterable>(&self, item: &T) -> bool {
        let needle = self.search.to_lowercase();
        needle.is_empty()
            || item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Filter `items` and cut out the current page.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> PageSlice<'a, T>
    where
        T: Filterable<Facet = F>,
    {
        let matching: Vec<&T> =
            items.iter().filter(|item| self.matches(*item)).collect();
        let total_matches = matching.len();
        let total_pages = total_matches.div_ceil(T::PAGE_SIZE);
        let items = paginate(&matching, self.page, T::PAGE_SIZE).to_vec();
        PageSlice {
            items,
            page: self.page,
            total_pages,
            total_matches,
        }
    }
}

/// One page of filtered results.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<'a, T> {
    pub items: Vec<&'a T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

impl<T> PageSlice<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// `items[(page - 1) * size .. page * size]`, clamped to the slice.
///
/// Out-of-range pages give an empty slice.
pub fn paginate<T>(items: &[T], page: usize, size: usize) -> &[T] {
    let size = size.max(1);
    let start = page.max(1).saturating_sub(1).saturating_mul(size);
    let start = start.min(items.len());
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Options for a facet's select: the sentinel, then every distinct value
/// in first-seen order.
pub fn facet_options<T: Filterable>(
    items: &[T],
    facet: T::Facet,
) -> Vec<String> {
    let mut options = vec![facet.sentinel().to_string()];
    for item in items {
        let value = item.facet_value(facet);
        if !value.is_empty() && !options.iter().any(|o| o == value) {
            options.push(value.to_string());
        }
    }
    options
}
