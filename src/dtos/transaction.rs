use serde::{Deserialize, Serialize};

/// Body for POST /deposit and POST /withdraw.
#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    pub value: Option<f64>,
    pub description: Option<String>,
}

/// Query params for GET /statement/date.
#[derive(Debug, Deserialize)]
pub struct StatementDateParams {
    pub date: Option<String>,
}

/// Body for GET /balance.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub balance: f64,
}
