//! Core transaction data and the dashboard view pipeline

pub mod error;
pub mod types;
pub mod models;
pub mod store;
pub mod filter;
pub mod sort;
pub mod pagination;
pub mod summary;
pub mod view;
pub mod dashboard;

pub use error::{CoreError, CoreResult, ErrorCode, ErrorDetails};
pub use types::TransactionType;
pub use models::Transaction;
pub use store::{TransactionStore, TypeCounts};
pub use filter::{filter_transactions, TransactionFilter, TypeFilter};
pub use sort::{sort_transactions, SortColumn, SortDirection, SortSpec};
pub use pagination::{page_links, total_pages, Page, PageLink, PageWindow, PaginationState};
pub use summary::DashboardSummary;
pub use view::{compose, ViewQuery, ViewStatus, VisibleWindow};
pub use dashboard::{Dashboard, DashboardView};
