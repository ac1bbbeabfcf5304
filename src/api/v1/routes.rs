/*
 * Responsibility
 * - v1 URL layout
 * - Which routes sit behind the authentication gate (merged sub-router + layer)
 */
use axum::{Router, routing::get};
use serde_json::json;

use crate::api::v1::handlers::{health::health, whoami::whoami};
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/health", get(health));

    let gated = Router::new().route("/whoami", get(whoami));
    let gated = middleware::authc::apply(gated, state.gate, Some(json!({"area": "account"})));

    public.merge(gated)
}
