//! Core data models for the wallet ledger

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{CoreError, CoreResult};
use super::types::TransactionType;

/// A single ledger entry.
///
/// The type tag always agrees with the sign of the amount; both constructors
/// and deserialization enforce it, and the fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTransaction")]
pub struct Transaction {
    id: String,
    date: NaiveDate,
    remark: String,
    amount: Decimal,
    currency: String,
    #[serde(rename = "type")]
    transaction_type: TransactionType,
}

impl Transaction {
    /// Create a transaction whose type is derived from the amount's sign
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        remark: impl Into<String>,
        amount: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            remark: remark.into(),
            amount,
            currency: currency.into(),
            transaction_type: TransactionType::from_amount(amount),
        }
    }

    /// Create a transaction with an explicit type, rejecting a sign mismatch
    pub fn try_new(
        id: impl Into<String>,
        date: NaiveDate,
        remark: impl Into<String>,
        amount: Decimal,
        currency: impl Into<String>,
        declared: TransactionType,
    ) -> CoreResult<Self> {
        let tx = Self::new(id, date, remark, amount, currency);
        if tx.transaction_type != declared {
            return Err(CoreError::InconsistentType {
                id: tx.id,
                amount: amount.to_string(),
                declared: declared.to_string(),
            });
        }
        Ok(tx)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn remark(&self) -> &str {
        &self.remark
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn is_credit(&self) -> bool {
        self.transaction_type == TransactionType::Credit
    }

    pub fn is_debit(&self) -> bool {
        self.transaction_type == TransactionType::Debit
    }
}

/// Transaction ids may arrive as JSON strings or integers
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

/// Unvalidated wire shape of a transaction
#[derive(Debug, Deserialize)]
struct RawTransaction {
    id: RawId,
    date: NaiveDate,
    remark: String,
    amount: Decimal,
    currency: String,
    #[serde(rename = "type", default)]
    transaction_type: Option<TransactionType>,
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = CoreError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        let id = match raw.id {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        };
        match raw.transaction_type {
            Some(declared) => {
                Transaction::try_new(id, raw.date, raw.remark, raw.amount, raw.currency, declared)
            }
            None => Ok(Transaction::new(id, raw.date, raw.remark, raw.amount, raw.currency)),
        }
    }
}
