//! Customer account model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entry::StatementEntry;

/// Account holder keyed by an external identifier (e.g. a tax ID).
///
/// `id` and `identifier` are immutable after creation; `name` can be
/// replaced in place and `statement` only ever grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub identifier: String,
    pub name: String,
    pub statement: Vec<StatementEntry>,
}

impl Customer {
    /// Create a customer with an empty statement.
    pub fn new(identifier: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            identifier,
            name,
            statement: Vec::new(),
        }
    }
}
