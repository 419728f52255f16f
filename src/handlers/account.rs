use axum::{extract::State, response::IntoResponse, Json};

use crate::dtos::{CreateAccountRequest, MessageResponse, UpdateAccountRequest};
use crate::error::AppError;
use crate::middleware::CustomerId;
use crate::services::metrics;
use crate::startup::AppState;

/// A required string field: present and non-empty, like the original API
/// which treated an empty string the same as an absent field.
fn require(field: Option<String>, name: &'static str) -> Result<String, AppError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::MissingParameter(name)),
    }
}

pub async fn create_account(
    State(state): State<AppState>,
    Json(body): Json<CreateAccountRequest>,
) -> Result<impl IntoResponse, AppError> {
    let identifier = require(body.identifier, "identifier")?;
    let name = require(body.name, "name")?;

    state.store.create(identifier, name).await.map_err(|e| {
        if matches!(e, AppError::DuplicateCustomer) {
            metrics::record_rejection("duplicate_customer");
        }
        e
    })?;

    metrics::record_account_operation("create");
    Ok(Json(MessageResponse::new("Account created")))
}

pub async fn get_account(
    State(state): State<AppState>,
    customer: CustomerId,
) -> Result<impl IntoResponse, AppError> {
    let customer = state.store.get(&customer.0).await?;
    Ok(Json(customer))
}

pub async fn update_account(
    State(state): State<AppState>,
    customer: CustomerId,
    Json(body): Json<UpdateAccountRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Resolve the customer before looking at the body
    state.store.resolve(&customer.0).await?;
    let name = require(body.name, "name")?;

    state.store.rename(&customer.0, name).await?;

    metrics::record_account_operation("update");
    Ok(Json(MessageResponse::new("Account updated")))
}

pub async fn delete_account(
    State(state): State<AppState>,
    customer: CustomerId,
) -> Result<impl IntoResponse, AppError> {
    state.store.remove(&customer.0).await?;

    metrics::record_account_operation("delete");
    Ok(Json(MessageResponse::new("Account deleted")))
}
