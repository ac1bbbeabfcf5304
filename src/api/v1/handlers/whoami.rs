/*
 * Responsibility
 * - GET /api/v1/whoami (gated)
 * - Report the subject the gate decided on; under the permit policy
 *   anonymous callers land here too and get `authenticated: false`
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::CurrentSubject;

#[derive(Debug, Serialize)]
pub struct WhoAmI {
    pub authenticated: bool,
    pub principal: Option<String>,
}

pub async fn whoami(CurrentSubject(subject): CurrentSubject) -> Json<WhoAmI> {
    Json(WhoAmI {
        authenticated: subject.is_authenticated(),
        principal: subject.principal().map(str::to_string),
    })
}
