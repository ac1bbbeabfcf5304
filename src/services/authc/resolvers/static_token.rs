//! Development resolver: fixed bearer tokens mapped to principals.
//!
//! `Authorization: Bearer <token>` (scheme in any case) resolves to the
//! configured principal.
//! Anything else (no header, other scheme, unknown token) is anonymous.
//! There is no signature or expiry check here; swap in a real resolver for
//! production traffic.

use std::collections::HashMap;

use async_trait::async_trait;
use axum::http::{header, request::Parts};

use crate::services::authc::{AuthcError, Subject, SubjectResolver};

#[derive(Clone, Default)]
pub struct StaticTokenResolver {
    tokens: HashMap<String, String>,
}

impl std::fmt::Debug for StaticTokenResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print tokens
        f.debug_struct("StaticTokenResolver")
            .field("tokens", &self.tokens.len())
            .finish()
    }
}

impl StaticTokenResolver {
    pub fn new<I, T, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, P)>,
        T: Into<String>,
        P: Into<String>,
    {
        Self {
            tokens: pairs
                .into_iter()
                .map(|(token, principal)| (token.into(), principal.into()))
                .collect(),
        }
    }

    fn bearer_token(parts: &Parts) -> Option<&str> {
        parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim_start().split_once(' '))
            // auth-scheme is case-insensitive (RFC 7235)
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
            .map(|(_, token)| token.trim())
            .filter(|t| !t.is_empty())
    }
}

#[async_trait]
impl SubjectResolver for StaticTokenResolver {
    async fn resolve_subject(&self, parts: &Parts) -> Result<Subject, AuthcError> {
        let Some(token) = Self::bearer_token(parts) else {
            return Ok(Subject::anonymous());
        };

        match self.tokens.get(token) {
            Some(principal) => Ok(Subject::authenticated(principal.clone())),
            None => {
                tracing::debug!("unknown bearer token");
                Ok(Subject::anonymous())
            }
        }
    }
}
