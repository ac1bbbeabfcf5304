use async_trait::async_trait;
use axum::{
    Json,
    http::{
        HeaderValue, StatusCode,
        header::{self, InvalidHeaderValue},
    },
};
use serde_json::json;

use crate::services::authc::{AuthcError, Exchange, UnauthenticatedHandler};

/// Answers anonymous callers with `401 Unauthorized` and a Bearer challenge.
#[derive(Debug, Clone)]
pub struct Challenge {
    www_authenticate: HeaderValue,
}

impl Challenge {
    pub fn new(realm: &str) -> Result<Self, InvalidHeaderValue> {
        let www_authenticate =
            HeaderValue::from_str(&format!("Bearer realm=\"{}\"", quote_escape(realm)))?;
        Ok(Self { www_authenticate })
    }
}

// RFC 7230 quoted-string: backslash-escape `"` and `\`
fn quote_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[async_trait]
impl UnauthenticatedHandler for Challenge {
    async fn handle_unauthenticated(&self, exchange: &mut Exchange) -> Result<bool, AuthcError> {
        tracing::debug!(path = exchange.uri().path(), "issuing bearer challenge");

        let body = json!({
            "error": {
                "code": "UNAUTHORIZED",
                "message": "authentication required",
            }
        });
        exchange.respond((
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, self.www_authenticate.clone())],
            Json(body),
        ));

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};

    use super::*;

    #[tokio::test]
    async fn stages_401_with_challenge_and_stops() {
        let policy = Challenge::new("reports").unwrap();
        let mut exchange =
            Exchange::new(Request::builder().uri("/reports").body(Body::empty()).unwrap());

        let proceed = policy.handle_unauthenticated(&mut exchange).await;

        assert_eq!(proceed, Ok(false));
        let response = exchange.response().unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers()[header::WWW_AUTHENTICATE],
            "Bearer realm=\"reports\""
        );
    }

    #[test]
    fn realm_is_escaped_as_quoted_string() {
        let policy = Challenge::new(r#"a"b\c"#).unwrap();

        assert_eq!(policy.www_authenticate, r#"Bearer realm="a\"b\\c""#);
    }
}
