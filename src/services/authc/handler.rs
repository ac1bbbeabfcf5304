use async_trait::async_trait;

use crate::services::authc::{AuthcError, Exchange};

/// Policy for requests whose subject is not authenticated.
///
/// Returns:
/// - `Ok(true)`  => the exchange is fit for downstream processing; the pipeline continues
/// - `Ok(false)` => the handler owns the outcome; any staged response is sent as-is
/// - `Err(_)`    => handler fault, surfaced to the caller unchanged
#[async_trait]
pub trait UnauthenticatedHandler: Send + Sync {
    async fn handle_unauthenticated(&self, exchange: &mut Exchange) -> Result<bool, AuthcError>;
}
