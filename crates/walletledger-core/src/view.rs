//! Presentation composer: filter, then sort, then paginate
//!
//! [`compose`] is a pure function of the data and a [`ViewQuery`]. Callers
//! invoke it after every input change; nothing is cached between calls.

use serde::{Deserialize, Serialize};

use super::filter::{filter_transactions, TransactionFilter};
use super::models::Transaction;
use super::pagination::{page_links, PageLink, PageWindow, PaginationState};
use super::sort::{sort_transactions, SortSpec};

/// Every input that shapes the visible table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewQuery {
    pub filter: TransactionFilter,
    pub sort: SortSpec,
    pub pagination: PaginationState,
}

impl ViewQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: PaginationState::new(page_size),
            ..Self::default()
        }
    }
}

/// Whether the composed table has rows to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ViewStatus {
    /// At least one row matches
    Populated,
    /// Nothing to show; `filters_active` tells whether clearing filters could help
    Empty { filters_active: bool },
}

/// The visible page of the transaction table
#[derive(Debug, Clone, Serialize)]
pub struct VisibleWindow<'a> {
    pub rows: Vec<&'a Transaction>,
    pub page: PageWindow,
    pub page_links: Vec<PageLink>,
    /// Transactions left after filtering
    pub filtered_count: usize,
    /// Transactions before filtering
    pub total_count: usize,
    pub status: ViewStatus,
}

impl VisibleWindow<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self.status, ViewStatus::Empty { .. })
    }
}

/// Run the full pipeline over `data`
pub fn compose<'a>(data: &'a [Transaction], query: &ViewQuery) -> VisibleWindow<'a> {
    let filtered = filter_transactions(data, &query.filter);
    let sorted = sort_transactions(&filtered, query.sort);
    let page = query.pagination.window(sorted.len());

    let status = if sorted.is_empty() {
        ViewStatus::Empty {
            filters_active: query.filter.is_active(),
        }
    } else {
        ViewStatus::Populated
    };

    log::debug!(
        "Composed view: {} of {} transactions, page {}/{} sorted by {} {}",
        sorted.len(),
        data.len(),
        page.current_page,
        page.total_pages,
        query.sort.column,
        query.sort.direction
    );

    VisibleWindow {
        rows: sorted[page.start_index..page.end_index].to_vec(),
        page_links: page_links(page.current_page, page.total_pages),
        page,
        filtered_count: sorted.len(),
        total_count: data.len(),
        status,
    }
}
