//! Request authentication gate for axum/tower pipelines.
//!
//! `services::authc::AuthenticationGate` asks an injected `SubjectResolver`
//! who the caller is; authenticated callers continue, everyone else is handed
//! to an injected `UnauthenticatedHandler` (challenge, login redirect, permit).
//! `middleware::authc::apply` installs a gate on an axum `Router`.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
