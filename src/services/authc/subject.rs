use async_trait::async_trait;
use axum::http::request::Parts;

use crate::services::authc::AuthcError;

/// The caller behind one request, as seen by a `SubjectResolver`.
///
/// Only resolvers build these; the gate reads `is_authenticated` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    principal: Option<String>,
    authenticated: bool,
}

impl Subject {
    pub fn authenticated(principal: impl Into<String>) -> Self {
        Self {
            principal: Some(principal.into()),
            authenticated: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            principal: None,
            authenticated: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }
}

/// Resolves the `Subject` for a request head.
///
/// Called once per evaluation; implementations must not cache subjects across
/// requests. `Err(_)` means the resolver itself failed, not that the caller is
/// anonymous (return `Subject::anonymous()` for that).
#[async_trait]
pub trait SubjectResolver: Send + Sync {
    async fn resolve_subject(&self, parts: &Parts) -> Result<Subject, AuthcError>;
}
