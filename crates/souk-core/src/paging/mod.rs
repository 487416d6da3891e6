//! Client-side filtering and incremental paging over an in-memory list.
//!
//! [`ListFilterPaginator`] keeps a window over the items of a borrowed slice
//! that pass the current [`FilterState`]. The window starts at one page and
//! grows by one page per [`ListFilterPaginator::load_more`] call, the way an
//! infinite-scroll list grows when its loader comes into view. The paginator
//! never watches a viewport itself; callers check
//! [`ListFilterPaginator::has_more`] and trigger `load_more`.
//!
//! Every filter change recomputes the match set from scratch. The source
//! collections are small and fully resident, so there is nothing to gain from
//! incremental diffing.
//!
//! ```rust
//! use std::num::NonZeroUsize;
//!
//! use souk_core::{models::FilterState, paging::ListFilterPaginator};
//! # use souk_core::models::Filterable;
//! # struct Item(String);
//! # impl Filterable for Item { fn display_text(&self) -> &str { &self.0 } }
//!
//! let items: Vec<Item> = (0..10).map(|i| Item(format!("item {i}"))).collect();
//! let mut pager = ListFilterPaginator::new(&items, NonZeroUsize::new(4).unwrap());
//! assert_eq!(pager.visible().len(), 4);
//!
//! pager.load_more();
//! pager.load_more();
//! assert_eq!(pager.visible().len(), 10);
//! assert!(!pager.has_more());
//!
//! pager.set_filter(FilterState::search("item 1"));
//! assert_eq!(pager.page_index(), 1);
//! assert_eq!(pager.visible().len(), 1);
//! ```

use std::num::NonZeroUsize;

use log::debug;

use crate::models::{FilterState, Filterable};

/// Page size used by the marketplace grid.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(size) => size,
    None => unreachable!(),
};

/// Snapshot of a paginator's window.
#[derive(Debug)]
pub struct PageState<'s, T> {
    /// Prefix of the filtered sequence currently exposed
    pub visible: &'s [&'s T],
    pub page_size: NonZeroUsize,
    /// 1-based number of pages loaded
    pub page_index: usize,
    pub has_more: bool,
}

/// Filtered, paged window over a borrowed collection.
#[derive(Debug)]
pub struct ListFilterPaginator<'a, T> {
    source: &'a [T],
    page_size: NonZeroUsize,
    filter: FilterState,
    matches: Vec<&'a T>,
    page_index: usize,
}

impl<'a, T: Filterable> ListFilterPaginator<'a, T> {
    /// Creates a paginator showing the first page of `source` under the
    /// default filter (empty search, all categories).
    pub fn new(source: &'a [T], page_size: NonZeroUsize) -> Self {
        let mut paginator = Self {
            source,
            page_size,
            filter: FilterState::default(),
            matches: Vec::new(),
            page_index: 1,
        };
        paginator.recompute_matches();
        paginator
    }

    /// Replaces the filter, recomputes the match set and resets to page 1.
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.recompute_matches();
        self.page_index = 1;
    }

    /// Grows the window by one page.
    ///
    /// Returns `false` and leaves the state untouched once every match is
    /// visible, so repeated calls after exhaustion are harmless.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.page_index += 1;
        debug!(
            "Loaded page {} ({} of {} matches visible)",
            self.page_index,
            self.visible_len(),
            self.matches.len()
        );
        true
    }

    /// Items currently exposed, in source order.
    pub fn visible(&self) -> &[&'a T] {
        &self.matches[..self.visible_len()]
    }

    /// Whether matches remain beyond the visible window.
    pub fn has_more(&self) -> bool {
        self.visible_len() < self.matches.len()
    }

    /// Number of pages loaded since the last filter change, starting at 1.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Number of items passing the current filter.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Size of the underlying collection.
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Snapshot of the current window.
    pub fn state(&self) -> PageState<'_, T> {
        PageState {
            visible: self.visible(),
            page_size: self.page_size,
            page_index: self.page_index,
            has_more: self.has_more(),
        }
    }

    fn visible_len(&self) -> usize {
        self.page_index
            .saturating_mul(self.page_size.get())
            .min(self.matches.len())
    }

    fn recompute_matches(&mut self) {
        let matcher = self.filter.matcher();
        self.matches = self
            .source
            .iter()
            .filter(|item| matcher.matches(*item))
            .collect();
        debug!(
            "Filter {:?} matched {} of {} items",
            self.filter,
            self.matches.len(),
            self.source.len()
        );
    }
}
