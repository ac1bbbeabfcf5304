use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use crate::services::authc::Subject;

/// The `Subject` the authentication gate decided on for this request.
///
/// The gate middleware stores it in request extensions before running the
/// handler. Missing means the route is not gated, so the handler is refused
/// with 401 rather than guessing.
pub struct CurrentSubject(pub Subject);

impl<S> FromRequestParts<S> for CurrentSubject
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Subject>()
            .cloned()
            .map(CurrentSubject)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};

    use super::*;

    #[tokio::test]
    async fn reads_subject_stored_by_the_gate() {
        let (mut parts, _) = Request::builder()
            .extension(Subject::authenticated("alice"))
            .body(Body::empty())
            .unwrap()
            .into_parts();

        let CurrentSubject(subject) = CurrentSubject::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(subject, Subject::authenticated("alice"));
    }

    #[tokio::test]
    async fn ungated_route_is_refused() {
        let (mut parts, _) = Request::new(Body::empty()).into_parts();

        let result = CurrentSubject::from_request_parts(&mut parts, &()).await;

        assert_eq!(result.err(), Some(StatusCode::UNAUTHORIZED));
    }
}
