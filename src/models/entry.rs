//! Statement entry model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Transaction kind (deposit or withdraw).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl TransactionKind {
    /// Get string representation for logs and metrics labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Single entry in a customer's statement. Append-only; entries are never
/// mutated after creation and only dropped with the whole account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementEntry {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub value: f64,
}

impl StatementEntry {
    /// Build a new entry stamped with the current time.
    pub fn new(kind: TransactionKind, value: f64, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            created_at: Utc::now(),
            description,
            value,
        }
    }

    /// Signed contribution of this entry to the balance.
    pub fn signed_value(&self) -> f64 {
        match self.kind {
            TransactionKind::Deposit => self.value,
            TransactionKind::Withdraw => -self.value,
        }
    }

    /// UTC calendar date the entry was created on.
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}
