use async_trait::async_trait;
use axum::http::{
    HeaderValue, Method, StatusCode,
    header::{self, InvalidHeaderValue},
};

use crate::services::authc::{AuthcError, Exchange, UnauthenticatedHandler};

/// Sends browsers to a login page.
///
/// Only GET/HEAD are redirected; anything else gets a plain 401 so a
/// state-changing call is never silently turned into a page load.
#[derive(Debug, Clone)]
pub struct RedirectToLogin {
    location: HeaderValue,
}

impl RedirectToLogin {
    pub fn new(login_url: &str) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            location: HeaderValue::from_str(login_url)?,
        })
    }
}

#[async_trait]
impl UnauthenticatedHandler for RedirectToLogin {
    async fn handle_unauthenticated(&self, exchange: &mut Exchange) -> Result<bool, AuthcError> {
        if matches!(*exchange.method(), Method::GET | Method::HEAD) {
            tracing::debug!(
                path = exchange.uri().path(),
                location = ?self.location,
                "redirecting to login"
            );
            exchange.respond((
                StatusCode::FOUND,
                [(header::LOCATION, self.location.clone())],
            ));
        } else {
            tracing::debug!(
                method = %exchange.method(),
                path = exchange.uri().path(),
                "not redirecting unsafe method"
            );
            exchange.respond(StatusCode::UNAUTHORIZED);
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};

    use super::*;

    fn exchange(method: Method) -> Exchange {
        Exchange::new(
            Request::builder()
                .method(method)
                .uri("/account")
                .body(Body::empty())
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn redirects_safe_methods() {
        let policy = RedirectToLogin::new("/login").unwrap();

        for method in [Method::GET, Method::HEAD] {
            let mut exchange = exchange(method);
            assert_eq!(policy.handle_unauthenticated(&mut exchange).await, Ok(false));

            let response = exchange.response().unwrap();
            assert_eq!(response.status(), StatusCode::FOUND);
            assert_eq!(response.headers()[header::LOCATION], "/login");
        }
    }

    #[tokio::test]
    async fn rejects_unsafe_methods_without_redirect() {
        let policy = RedirectToLogin::new("/login").unwrap();
        let mut exchange = exchange(Method::POST);

        assert_eq!(policy.handle_unauthenticated(&mut exchange).await, Ok(false));

        let response = exchange.response().unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::LOCATION).is_none());
    }
}
