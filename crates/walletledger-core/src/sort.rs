//! Column sorting for the transaction table

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::models::Transaction;

/// Sortable table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Date,
    Remark,
    Amount,
    Currency,
    Type,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Date,
        SortColumn::Remark,
        SortColumn::Amount,
        SortColumn::Currency,
        SortColumn::Type,
    ];

    /// Column header label
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Date => "Date",
            SortColumn::Remark => "Remark",
            SortColumn::Amount => "Amount",
            SortColumn::Currency => "Currency",
            SortColumn::Type => "Type",
        }
    }
}

impl std::str::FromStr for SortColumn {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(SortColumn::Date),
            "remark" => Ok(SortColumn::Remark),
            "amount" => Ok(SortColumn::Amount),
            "currency" => Ok(SortColumn::Currency),
            "type" => Ok(SortColumn::Type),
            _ => Err(format!("Invalid sort column: {}", s)),
        }
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortColumn::Date => write!(f, "date"),
            SortColumn::Remark => write!(f, "remark"),
            SortColumn::Amount => write!(f, "amount"),
            SortColumn::Currency => write!(f, "currency"),
            SortColumn::Type => write!(f, "type"),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

impl SortDirection {
    pub fn reversed(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            column: SortColumn::Date,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortSpec {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Header click: flip direction on the active column, otherwise switch
    /// to `column` ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.reversed();
        } else {
            self.column = column;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Locale-style text order: case-insensitive first, exact text breaks ties
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Ascending order of two transactions on one column
pub fn compare(a: &Transaction, b: &Transaction, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Date => a.date().cmp(&b.date()),
        SortColumn::Remark => compare_text(a.remark(), b.remark()),
        SortColumn::Amount => a.amount().cmp(&b.amount()),
        SortColumn::Currency => a.currency().cmp(b.currency()),
        SortColumn::Type => a.transaction_type().as_str().cmp(b.transaction_type().as_str()),
    }
}

/// Sorted copy of `items`. Equal keys keep their relative order in both
/// directions.
pub fn sort_transactions<'a>(items: &[&'a Transaction], spec: SortSpec) -> Vec<&'a Transaction> {
    let mut sorted = items.to_vec();
    match spec.direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| compare(a, b, spec.column)),
        SortDirection::Descending => sorted.sort_by(|a, b| compare(b, a, spec.column)),
    }
    sorted
}
