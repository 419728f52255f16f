use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

pub const CUSTOMER_ID_HEADER: &str = "X-Customer-ID";

/// External identifier extractor for account-service.
///
/// Pulls the customer's external identifier from the X-Customer-ID header.
/// Every route except account creation and the root/health/metrics endpoints
/// resolves the customer through this value; a request without the header
/// cannot resolve anyone, so it is rejected as "Customer not found" just like
/// an unknown identifier.
#[derive(Debug, Clone)]
pub struct CustomerId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for CustomerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identifier = parts
            .headers
            .get(CUSTOMER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::CustomerNotFound)?;

        // Add to tracing span for observability
        tracing::Span::current().record("customer_id", identifier);

        Ok(CustomerId(identifier.to_string()))
    }
}
