/// Factory: build the `AuthenticationGate` from application `Config`.
use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::services::authc::{AuthenticationGate, Policy, resolvers::StaticTokenResolver};

pub fn build_gate(config: &Config) -> Result<AuthenticationGate, ConfigError> {
    let handler = config.authc_policy.build().map_err(|_| match config.authc_policy {
        Policy::Redirect { .. } => ConfigError::Invalid("AUTHC_LOGIN_URL"),
        _ => ConfigError::Invalid("AUTHC_REALM"),
    })?;

    if config.static_tokens.is_empty() {
        tracing::warn!("AUTHC_STATIC_TOKENS is empty; every caller resolves as anonymous");
    }
    let resolver = StaticTokenResolver::new(config.static_tokens.iter().cloned());

    tracing::info!(policy = ?config.authc_policy, "authentication gate configured");

    Ok(AuthenticationGate::new(Arc::new(resolver), handler))
}
