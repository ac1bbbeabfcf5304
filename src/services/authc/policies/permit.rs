use async_trait::async_trait;

use crate::services::authc::{AuthcError, Exchange, UnauthenticatedHandler};

/// Lets anonymous callers through, leaving a warning in the log.
///
/// Meant for rolling out a gate in observe-only mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermitWithWarning;

#[async_trait]
impl UnauthenticatedHandler for PermitWithWarning {
    async fn handle_unauthenticated(&self, exchange: &mut Exchange) -> Result<bool, AuthcError> {
        tracing::warn!(
            method = %exchange.method(),
            path = exchange.uri().path(),
            "unauthenticated request permitted"
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};

    use super::*;

    #[tokio::test]
    async fn continues_without_staging_a_response() {
        let mut exchange = Exchange::new(Request::builder().uri("/").body(Body::empty()).unwrap());

        let proceed = PermitWithWarning.handle_unauthenticated(&mut exchange).await;

        assert_eq!(proceed, Ok(true));
        assert!(!exchange.has_response());
    }
}
