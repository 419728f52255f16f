use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;

use crate::dtos::{BalanceResponse, MessageResponse, StatementDateParams, TransactionRequest};
use crate::error::AppError;
use crate::middleware::CustomerId;
use crate::services::metrics;
use crate::startup::AppState;

/// A required amount: present and strictly positive. The original treated a
/// zero value as a missing parameter; a negative value would break the
/// non-negative entry invariant, so it is rejected the same way.
fn require_value(value: Option<f64>) -> Result<f64, AppError> {
    match value {
        Some(value) if value > 0.0 => Ok(value),
        _ => Err(AppError::MissingParameter("value")),
    }
}

pub async fn deposit(
    State(state): State<AppState>,
    customer: CustomerId,
    Json(body): Json<TransactionRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Resolve the customer before looking at the body
    state.store.resolve(&customer.0).await?;
    let value = require_value(body.value)?;

    state
        .store
        .deposit(&customer.0, value, body.description)
        .await?;

    metrics::record_transaction("deposit");
    Ok(Json(MessageResponse::new("Deposit successful")))
}

pub async fn withdraw(
    State(state): State<AppState>,
    customer: CustomerId,
    Json(body): Json<TransactionRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.store.resolve(&customer.0).await?;
    let value = require_value(body.value)?;

    state
        .store
        .withdraw(&customer.0, value, body.description)
        .await
        .map_err(|e| {
            if matches!(e, AppError::InsufficientFunds) {
                metrics::record_rejection("insufficient_funds");
            }
            e
        })?;

    metrics::record_transaction("withdraw");
    Ok(Json(MessageResponse::new("Withdraw successful")))
}

pub async fn get_statement(
    State(state): State<AppState>,
    customer: CustomerId,
) -> Result<impl IntoResponse, AppError> {
    let statement = state.store.statement(&customer.0).await?;
    Ok(Json(statement))
}

pub async fn get_statement_by_date(
    State(state): State<AppState>,
    customer: CustomerId,
    Query(params): Query<StatementDateParams>,
) -> Result<impl IntoResponse, AppError> {
    state.store.resolve(&customer.0).await?;
    let date = params.date.ok_or(AppError::MissingParameter("date"))?;
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidParameter("date must be formatted YYYY-MM-DD".to_string()))?;

    let statement = state.store.statement_on(&customer.0, date).await?;
    Ok(Json(statement))
}

pub async fn get_balance(
    State(state): State<AppState>,
    customer: CustomerId,
) -> Result<impl IntoResponse, AppError> {
    let balance = state.store.balance(&customer.0).await?;
    Ok(Json(BalanceResponse { balance }))
}
