use async_trait::async_trait;
use axum::http::request::Parts;

use crate::services::authc::{AuthcError, Subject, SubjectResolver};

/// Reads a `Subject` that an earlier layer stored in request extensions.
///
/// Use this when credential checks live in their own middleware and the gate
/// only has to decide what to do with the result. No subject => anonymous.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionResolver;

#[async_trait]
impl SubjectResolver for ExtensionResolver {
    async fn resolve_subject(&self, parts: &Parts) -> Result<Subject, AuthcError> {
        Ok(parts
            .extensions
            .get::<Subject>()
            .cloned()
            .unwrap_or_else(Subject::anonymous))
    }
}
