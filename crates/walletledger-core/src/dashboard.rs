//! Dashboard session: the store, its summary, and the current view inputs
//!
//! Each method mirrors a control on the dashboard (search box, type buttons,
//! column headers, pager, page size selector). After every change the stored
//! page is synced against the filtered count, so [`Dashboard::view`] never
//! sees a stale page number.

use serde::Serialize;
use walletledger_config::Config;

use super::error::CoreResult;
use super::filter::{filter_transactions, TransactionFilter, TypeFilter};
use super::sort::{SortColumn, SortSpec};
use super::store::{TransactionStore, TypeCounts};
use super::summary::DashboardSummary;
use super::view::{compose, ViewQuery, VisibleWindow};

/// Everything a renderer needs for one frame
#[derive(Debug, Serialize)]
pub struct DashboardView<'a> {
    pub summary: &'a DashboardSummary,
    pub type_counts: TypeCounts,
    pub filter: &'a TransactionFilter,
    pub sort: SortSpec,
    pub page_size_options: &'a [usize],
    pub table: VisibleWindow<'a>,
}

/// A single user's dashboard session
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: TransactionStore,
    summary: DashboardSummary,
    query: ViewQuery,
    page_size_options: Vec<usize>,
}

impl Dashboard {
    /// Create a session over `store` starting at page 1
    pub fn new(store: TransactionStore, summary: DashboardSummary, default_page_size: usize) -> Self {
        Self {
            store,
            summary,
            query: ViewQuery::new(default_page_size),
            page_size_options: vec![10, 25, 50, 100],
        }
    }

    /// Load the configured data source and build the session
    pub fn from_config(config: &Config) -> CoreResult<Self> {
        let store = match &config.data.path {
            Some(path) => TransactionStore::load_json(path)?,
            None => TransactionStore::fixture(&config.data.currency),
        };
        Self::with_store(store, config)
    }

    /// Build the session over an already loaded store
    pub fn with_store(store: TransactionStore, config: &Config) -> CoreResult<Self> {
        let summary = DashboardSummary::from_config(&config.summary, store.transactions())?;
        let mut dashboard = Self::new(store, summary, config.pagination.default_page_size);
        dashboard.page_size_options = config.pagination.page_size_options.clone();
        Ok(dashboard)
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn summary(&self) -> &DashboardSummary {
        &self.summary
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    fn filtered_count(&self) -> usize {
        filter_transactions(self.store.transactions(), &self.query.filter).len()
    }

    fn sync_pagination(&mut self) {
        let count = self.filtered_count();
        self.query.pagination.sync(count);
    }

    fn first_page(&mut self) {
        let count = self.filtered_count();
        self.query.pagination.go_to_page(1, count);
    }

    /// Update the search text and return to page 1
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.filter.search = search.into();
        self.first_page();
    }

    /// Change the type filter and return to page 1
    pub fn set_type_filter(&mut self, type_filter: TypeFilter) {
        self.query.filter.type_filter = type_filter;
        self.first_page();
    }

    /// Drop search text and type filter
    pub fn clear_filters(&mut self) {
        self.query.filter = TransactionFilter::default();
        self.first_page();
    }

    /// Column header click
    pub fn sort_by(&mut self, column: SortColumn) {
        self.query.sort.toggle(column);
        log::debug!("Sorting by {} {}", self.query.sort.column, self.query.sort.direction);
        self.sync_pagination();
    }

    pub fn go_to_page(&mut self, page: i64) {
        let count = self.filtered_count();
        self.query.pagination.go_to_page(page, count);
    }

    pub fn next_page(&mut self) {
        let count = self.filtered_count();
        self.query.pagination.next_page(count);
    }

    pub fn prev_page(&mut self) {
        let count = self.filtered_count();
        self.query.pagination.prev_page(count);
    }

    pub fn set_page_size(&mut self, size: usize) {
        if !self.page_size_options.contains(&size) {
            log::debug!("Page size {} is not one of the offered options", size);
        }
        self.query.pagination.set_page_size(size);
    }

    /// Back to page 1 with the default page size
    pub fn reset(&mut self) {
        self.query.pagination.reset();
    }

    /// Compose the current frame
    pub fn view(&self) -> DashboardView<'_> {
        DashboardView {
            summary: &self.summary,
            type_counts: self.store.type_counts(),
            filter: &self.query.filter,
            sort: self.query.sort,
            page_size_options: &self.page_size_options,
            table: compose(self.store.transactions(), &self.query),
        }
    }
}
