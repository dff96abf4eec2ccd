//! Type filter and free-text search over transactions

use serde::{Deserialize, Serialize};

use super::models::Transaction;
use super::types::TransactionType;

/// Which transaction types to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    /// Keep everything
    All,
    /// Keep credits only
    Credit,
    /// Keep debits only
    Debit,
}

impl Default for TypeFilter {
    fn default() -> Self {
        TypeFilter::All
    }
}

impl TypeFilter {
    /// Check if a transaction type passes this filter
    pub fn accepts(&self, transaction_type: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Credit => transaction_type == TransactionType::Credit,
            TypeFilter::Debit => transaction_type == TransactionType::Debit,
        }
    }
}

impl std::str::FromStr for TypeFilter {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "credit" | "credits" => Ok(TypeFilter::Credit),
            "debit" | "debits" => Ok(TypeFilter::Debit),
            _ => Err(format!("Invalid type filter: {}", s)),
        }
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeFilter::All => write!(f, "all"),
            TypeFilter::Credit => write!(f, "credit"),
            TypeFilter::Debit => write!(f, "debit"),
        }
    }
}

/// Combined type filter and search text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    #[serde(default)]
    pub type_filter: TypeFilter,
    /// Raw search text as typed; blank means no search
    #[serde(default)]
    pub search: String,
}

impl TransactionFilter {
    pub fn new(type_filter: TypeFilter, search: impl Into<String>) -> Self {
        Self {
            type_filter,
            search: search.into(),
        }
    }

    /// Whether anything would be excluded
    pub fn is_active(&self) -> bool {
        self.type_filter != TypeFilter::All || !self.search.trim().is_empty()
    }

    /// Check if a transaction passes both the type filter and the search
    pub fn matches(&self, tx: &Transaction) -> bool {
        self.type_filter.accepts(tx.transaction_type()) && matches_search(tx, &self.search)
    }
}

/// Case-insensitive substring search over remark, type, amount and currency
pub fn matches_search(tx: &Transaction, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    tx.remark().to_lowercase().contains(&query)
        || tx.transaction_type().as_str().to_lowercase().contains(&query)
        || tx.amount().normalize().to_string().contains(&query)
        || tx.currency().to_lowercase().contains(&query)
}

/// Keep the transactions matching `filter`, in their original order
pub fn filter_transactions<'a, I>(transactions: I, filter: &TransactionFilter) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions.into_iter().filter(|tx| filter.matches(tx)).collect()
}
