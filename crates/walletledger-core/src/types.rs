//! Basic types for the transaction model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction type tag: inflow or outflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money in; amount is zero or positive
    Credit,
    /// Money out; amount is negative
    Debit,
}

impl TransactionType {
    /// The type implied by the sign of an amount
    pub fn from_amount(amount: Decimal) -> Self {
        if amount.is_sign_negative() && !amount.is_zero() {
            TransactionType::Debit
        } else {
            TransactionType::Credit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Credit => "Credit",
            TransactionType::Debit => "Debit",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "credit" => Ok(TransactionType::Credit),
            "debit" => Ok(TransactionType::Debit),
            _ => Err(format!("Invalid transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_amount() {
        assert_eq!(TransactionType::from_amount(Decimal::from(3000)), TransactionType::Credit);
        assert_eq!(TransactionType::from_amount(Decimal::from(-40)), TransactionType::Debit);
        assert_eq!(TransactionType::from_amount(Decimal::ZERO), TransactionType::Credit);
    }

    #[test]
    fn test_transaction_type_from_str() {
        assert_eq!("credit".parse::<TransactionType>().unwrap(), TransactionType::Credit);
        assert_eq!("DEBIT".parse::<TransactionType>().unwrap(), TransactionType::Debit);
        assert!("transfer".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_transaction_type_serde_names() {
        assert_eq!(serde_json::to_string(&TransactionType::Credit).unwrap(), "\"Credit\"");
        let parsed: TransactionType = serde_json::from_str("\"Debit\"").unwrap();
        assert_eq!(parsed, TransactionType::Debit);
    }
}
