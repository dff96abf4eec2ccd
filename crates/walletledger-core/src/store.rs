//! Transaction store: the read-only collection behind the dashboard
//!
//! The built-in fixture reproduces the wallet ledger's 150 transactions:
//! nine hand-written base entries, a block of extra credits and debits, and
//! generated `Expense N` debits that bring the totals to exactly 7,890 in
//! credits and 4,455 in debits.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::error::{CoreError, CoreResult};
use super::models::Transaction;

/// Number of transactions in the built-in fixture
pub const FIXTURE_SIZE: usize = 150;
/// Total credits the fixture adds up to
pub const FIXTURE_TOTAL_CREDITS: i64 = 7890;
/// Total debits (as a magnitude) the fixture adds up to
pub const FIXTURE_TOTAL_DEBITS: i64 = 4455;

const BASE: [(&str, i64, &str); 9] = [
    ("Salary", 3000, "2023-10-01"),
    ("Groceries", -150, "2023-10-02"),
    ("Gym Membership", -50, "2023-10-03"),
    ("Dinner", -40, "2023-10-04"),
    ("Movie Tickets", -30, "2023-10-05"),
    ("Rent", -1200, "2023-10-06"),
    ("Utilities", -100, "2023-10-07"),
    ("Car Payment", -400, "2023-10-08"),
    ("Insurance", -200, "2023-10-09"),
];

const EXTRA_CREDITS: [(&str, i64, &str); 11] = [
    ("Freelance Work", 1200, "2023-11-10"),
    ("Bonus Payment", 800, "2023-11-12"),
    ("Investment Return", 650, "2023-11-15"),
    ("Refund", 320, "2023-11-18"),
    ("Gift Money", 250, "2023-11-20"),
    ("Side Hustle", 400, "2023-11-22"),
    ("Cashback", 80, "2023-11-25"),
    ("Dividend", 150, "2023-11-28"),
    ("Commission", 300, "2023-12-01"),
    ("Consulting Fee", 500, "2023-12-03"),
    ("Part-time Job", 240, "2023-12-05"),
];

const EXTRA_DEBITS: [(&str, i64, &str); 20] = [
    ("Coffee", -25, "2023-10-11"),
    ("Lunch", -35, "2023-10-12"),
    ("Gas", -60, "2023-10-13"),
    ("Parking", -15, "2023-10-14"),
    ("Subscription", -12, "2023-10-15"),
    ("Books", -45, "2023-10-16"),
    ("Clothes", -85, "2023-10-17"),
    ("Medical", -120, "2023-10-18"),
    ("Phone Bill", -75, "2023-10-19"),
    ("Internet", -90, "2023-10-20"),
    ("Streaming Service", -15, "2023-10-21"),
    ("ATM Fee", -5, "2023-10-22"),
    ("Bank Fee", -3, "2023-10-23"),
    ("Shopping", -80, "2023-10-24"),
    ("Pharmacy", -25, "2023-10-25"),
    ("Taxi", -20, "2023-10-26"),
    ("Public Transport", -18, "2023-10-27"),
    ("Pet Supplies", -50, "2023-10-28"),
    ("Home Supplies", -30, "2023-10-29"),
    ("Electronics", -200, "2023-10-30"),
];

/// Counts shown on the type filter buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TypeCounts {
    pub all: usize,
    pub credit: usize,
    pub debit: usize,
}

/// Ordered, read-only transaction collection with unique ids
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Build a store, rejecting duplicate ids
    pub fn from_transactions(transactions: Vec<Transaction>) -> CoreResult<Self> {
        {
            let mut seen = HashSet::with_capacity(transactions.len());
            for tx in &transactions {
                if !seen.insert(tx.id()) {
                    return Err(CoreError::DuplicateId { id: tx.id().to_string() });
                }
            }
        }
        Ok(Self { transactions })
    }

    /// The built-in 150 transaction fixture
    pub fn fixture(currency: &str) -> Self {
        let mut rows: Vec<(String, i64, NaiveDate)> = BASE
            .iter()
            .chain(EXTRA_CREDITS.iter())
            .chain(EXTRA_DEBITS.iter())
            .map(|(remark, amount, date)| (remark.to_string(), *amount, fixture_date(date)))
            .collect();

        let debits_so_far: i64 = rows.iter().filter(|r| r.1 < 0).map(|r| -r.1).sum();
        let filler_count = FIXTURE_SIZE - rows.len();
        rows.extend(expense_filler(filler_count, FIXTURE_TOTAL_DEBITS - debits_so_far));

        let transactions = rows
            .into_iter()
            .enumerate()
            .map(|(index, (remark, amount, date))| {
                Transaction::new((index + 1).to_string(), date, remark, Decimal::from(amount), currency)
            })
            .collect();

        log::debug!("Built fixture with {} transactions", FIXTURE_SIZE);
        Self { transactions }
    }

    /// Load a JSON array of transactions from disk
    pub fn load_json(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => CoreError::IoError(e),
        })?;

        let transactions: Vec<Transaction> = serde_json::from_str(&content)
            .map_err(|e| CoreError::InvalidFormat { message: e.to_string() })?;

        log::info!("Loaded {} transactions from {}", transactions.len(), path.display());
        Self::from_transactions(transactions)
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Get transaction by id
    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id() == id)
    }

    /// Count transactions per type
    pub fn type_counts(&self) -> TypeCounts {
        let credit = self.transactions.iter().filter(|t| t.is_credit()).count();
        TypeCounts {
            all: self.transactions.len(),
            credit,
            debit: self.transactions.len() - credit,
        }
    }
}

fn fixture_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or(NaiveDate::MIN)
}

/// `count` debits dated from 2024-01-08 (capped at the 31st) whose
/// magnitudes add up to `total`, spread as evenly as possible.
fn expense_filler(count: usize, total: i64) -> Vec<(String, i64, NaiveDate)> {
    if count == 0 {
        return Vec::new();
    }
    let base = total / count as i64;
    let extra = (total % count as i64) as usize;

    (0..count)
        .map(|i| {
            let magnitude = base + if i < extra { 1 } else { 0 };
            let day = (8 + i).min(31) as u32;
            let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or(NaiveDate::MIN);
            (format!("Expense {}", i + 1), -magnitude, date)
        })
        .collect()
}
