//! Authentication gate: the single authenticated/unauthenticated branch point.
//!
//! The gate owns no policy of its own. Who the caller is comes from the
//! injected `SubjectResolver`; what happens to anonymous callers comes from the
//! injected `UnauthenticatedHandler`.

use std::sync::Arc;

use crate::services::authc::{
    AuthcError, Exchange, Subject, SubjectResolver, UnauthenticatedHandler,
};

/// Opaque per-route value attached when the gate is installed on a router.
pub type MappedValue = serde_json::Value;

/// Cheap to clone (two `Arc`s); holds no mutable state, so one instance is
/// shared by every request on the routes it guards.
#[derive(Clone)]
pub struct AuthenticationGate {
    resolver: Arc<dyn SubjectResolver>,
    handler: Arc<dyn UnauthenticatedHandler>,
}

impl std::fmt::Debug for AuthenticationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticationGate").finish_non_exhaustive()
    }
}

/// Outcome of one evaluation: the decision plus the subject it was based on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub proceed: bool,
    pub subject: Subject,
}

impl AuthenticationGate {
    pub fn new(
        resolver: Arc<dyn SubjectResolver>,
        handler: Arc<dyn UnauthenticatedHandler>,
    ) -> Self {
        Self { resolver, handler }
    }

    /// Decide whether the pipeline continues for this exchange.
    ///
    /// `Ok(true)` means continue. `Ok(false)` means the unauthenticated handler
    /// has produced (or will produce) the response and the pipeline stops.
    /// Resolver and handler errors come back exactly as they were raised.
    ///
    /// `mapped` is accepted for the pipeline contract and never read here.
    pub async fn evaluate(
        &self,
        exchange: &mut Exchange,
        mapped: Option<&MappedValue>,
    ) -> Result<bool, AuthcError> {
        Ok(self.decide(exchange, mapped).await?.proceed)
    }

    /// Same decision as `evaluate`, also returning the subject resolved for it
    /// so callers can pass it downstream instead of resolving a second time.
    pub async fn decide(
        &self,
        exchange: &mut Exchange,
        _mapped: Option<&MappedValue>,
    ) -> Result<Verdict, AuthcError> {
        let subject = self.resolver.resolve_subject(exchange.parts()).await?;

        if subject.is_authenticated() {
            tracing::debug!(
                principal = subject.principal().unwrap_or("-"),
                "subject authenticated"
            );
            return Ok(Verdict {
                proceed: true,
                subject,
            });
        }

        tracing::debug!(
            method = %exchange.method(),
            path = exchange.uri().path(),
            "subject not authenticated, delegating to handler"
        );
        let proceed = self.handler.handle_unauthenticated(exchange).await?;
        Ok(Verdict { proceed, subject })
    }
}
