//! Summary card values
//!
//! Totals are derived from the transactions. Percentage changes compare the
//! first half of the collection (the "recent" window, in insertion order)
//! against the rest.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use walletledger_config::{FixedSummaryConfig, SummaryConfig, SummaryMode};

use super::error::{CoreError, CoreResult};
use super::models::Transaction;

/// Aggregate values shown above the transaction table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_balance: Decimal,
    pub total_credits: Decimal,
    pub total_debits: Decimal,
    pub transaction_count: usize,
    /// Percentage changes; `None` when there is no baseline to compare to
    pub balance_change: Option<i64>,
    pub credits_change: Option<i64>,
    pub debits_change: Option<i64>,
    pub transaction_change: Option<i64>,
}

/// Credit total and debit magnitude of a window
#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    credits: Decimal,
    debits: Decimal,
}

impl Totals {
    fn of(transactions: &[Transaction]) -> CoreResult<Self> {
        transactions.iter().try_fold(Self::default(), |mut acc, tx| {
            let total = if tx.is_credit() { &mut acc.credits } else { &mut acc.debits };
            *total = total
                .checked_add(tx.amount().abs())
                .ok_or_else(|| CoreError::AmountOverflow { id: tx.id().to_string() })?;
            Ok(acc)
        })
    }

    /// Both sides are non-negative, so the difference always fits
    fn balance(&self) -> Decimal {
        self.credits - self.debits
    }
}

/// `(recent - older) / |older|` as a whole percentage, rounding halves up.
///
/// `None` without a baseline or when the ratio leaves the decimal range.
fn percent_change(recent: Decimal, older: Decimal) -> Option<i64> {
    if older.is_zero() {
        return None;
    }
    recent
        .checked_sub(older)?
        .checked_div(older.abs())?
        .checked_mul(Decimal::ONE_HUNDRED)?
        .checked_add(Decimal::new(5, 1))?
        .floor()
        .to_i64()
}

impl DashboardSummary {
    /// Derive every card from the transaction sequence
    pub fn from_transactions(transactions: &[Transaction]) -> CoreResult<Self> {
        if transactions.is_empty() {
            return Ok(Self {
                total_balance: Decimal::ZERO,
                total_credits: Decimal::ZERO,
                total_debits: Decimal::ZERO,
                transaction_count: 0,
                balance_change: None,
                credits_change: None,
                debits_change: None,
                transaction_change: None,
            });
        }

        let all = Totals::of(transactions)?;
        let (recent, older) = transactions.split_at(transactions.len() / 2);
        let recent_totals = Totals::of(recent)?;
        let older_totals = Totals::of(older)?;

        let transaction_change = percent_change(
            Decimal::from(recent.len()),
            Decimal::from(older.len().max(1)),
        );

        Ok(Self {
            total_balance: all.balance(),
            total_credits: all.credits,
            total_debits: all.debits,
            transaction_count: transactions.len(),
            balance_change: percent_change(recent_totals.balance(), older_totals.balance()),
            credits_change: percent_change(recent_totals.credits, older_totals.credits),
            debits_change: percent_change(recent_totals.debits, older_totals.debits),
            transaction_change,
        })
    }

    /// Use hard-coded values as they are
    pub fn fixed(values: &FixedSummaryConfig) -> Self {
        Self {
            total_balance: values.total_balance,
            total_credits: values.total_credits,
            total_debits: values.total_debits,
            transaction_count: values.transaction_count,
            balance_change: Some(values.balance_change),
            credits_change: Some(values.credits_change),
            debits_change: Some(values.debits_change),
            transaction_change: Some(values.transaction_change),
        }
    }

    /// Build the summary the configuration asks for
    pub fn from_config(config: &SummaryConfig, transactions: &[Transaction]) -> CoreResult<Self> {
        match config.mode {
            SummaryMode::Derived => Self::from_transactions(transactions),
            SummaryMode::Fixed => {
                log::debug!("Using fixed summary values from configuration");
                Ok(Self::fixed(&config.fixed))
            }
        }
    }
}
