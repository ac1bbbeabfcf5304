//! Authentication gate as an axum middleware.
//!
//! Per request:
//! - wrap the request in an `Exchange` and run `AuthenticationGate::decide`
//! - `true`  => store the resolved `Subject` in request extensions and hand the
//!   request to the next service (handlers read it, they never re-resolve)
//! - `false` => send the response the unauthenticated handler staged
//!   (a 401 with a generic Bearer challenge if it staged none)
//! - `Err`   => `AppError` (500 / 503 JSON body)

use std::sync::Arc;

use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::services::authc::{AuthenticationGate, Exchange, MappedValue};

#[derive(Clone)]
struct GateState {
    gate: AuthenticationGate,
    mapped: Option<Arc<MappedValue>>,
}

/// Put `gate` in front of every route already registered on `router`.
///
/// `mapped` is the per-route value handed to the gate on each evaluation.
///
/// Example:
/// ```ignore
/// let reports = Router::new().route("/reports", get(list_reports));
/// let reports = middleware::authc::apply(reports, state.gate.clone(), Some(json!({"area": "reports"})));
/// app = app.merge(reports);
/// ```
pub fn apply<S>(router: Router<S>, gate: AuthenticationGate, mapped: Option<MappedValue>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let state = GateState {
        gate,
        mapped: mapped.map(Arc::new),
    };
    router.layer(middleware::from_fn_with_state(state, authc_middleware))
}

async fn authc_middleware(
    State(state): State<GateState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let mut exchange = Exchange::new(req);

    let verdict = state
        .gate
        .decide(&mut exchange, state.mapped.as_deref())
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "authentication gate failed");
            AppError::from(err)
        })?;

    let (mut req, staged) = exchange.into_parts();

    if verdict.proceed {
        if staged.is_some() {
            tracing::debug!("dropping response staged by a handler that let the request through");
        }
        // middleware → extractor
        req.extensions_mut().insert(verdict.subject);
        return Ok(next.run(req).await);
    }

    match staged {
        Some(response) => Ok(response),
        None => {
            tracing::warn!(
                path = req.uri().path(),
                "unauthenticated handler stopped the request without a response"
            );
            Ok((
                [(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"))],
                AppError::Unauthorized,
            )
                .into_response())
        }
    }
}
