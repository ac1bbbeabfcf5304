/*
 * Responsibility
 * - Concrete UnauthenticatedHandler policies
 * - Policy: the config-facing selector that builds one of them
 */
mod challenge;
mod permit;
mod redirect;

use std::sync::Arc;

use axum::http::header::InvalidHeaderValue;

pub use challenge::Challenge;
pub use permit::PermitWithWarning;
pub use redirect::RedirectToLogin;

use crate::services::authc::UnauthenticatedHandler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Policy {
    /// 401 with a `WWW-Authenticate: Bearer` challenge.
    Challenge { realm: String },
    /// 302 to a login page for safe methods, 401 otherwise.
    Redirect { login_url: String },
    /// Let the request through and log it.
    Permit,
}

impl Policy {
    pub fn build(&self) -> Result<Arc<dyn UnauthenticatedHandler>, InvalidHeaderValue> {
        let handler: Arc<dyn UnauthenticatedHandler> = match self {
            Policy::Challenge { realm } => Arc::new(Challenge::new(realm)?),
            Policy::Redirect { login_url } => Arc::new(RedirectToLogin::new(login_url)?),
            Policy::Permit => Arc::new(PermitWithWarning),
        };

        Ok(handler)
    }
}
