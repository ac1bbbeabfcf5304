//! One inbound request plus the slot for its outgoing response.
//!
//! The request is kept split into head (`Parts`) and body so resolvers can be
//! given a shared `&Parts` across an `.await` (`axum::body::Body` is `Send`
//! but not `Sync`, so `&Request<Body>` would make their futures `!Send`).

use axum::{
    body::Body,
    http::{Method, Request, Uri, request::Parts},
    response::{IntoResponse, Response},
};

pub struct Exchange {
    parts: Parts,
    body: Body,
    response: Option<Response>,
}

impl Exchange {
    pub fn new(request: Request<Body>) -> Self {
        let (parts, body) = request.into_parts();
        Self {
            parts,
            body,
            response: None,
        }
    }

    /// Read-only view of the request head (method, uri, headers, extensions).
    pub fn parts(&self) -> &Parts {
        &self.parts
    }

    pub fn method(&self) -> &Method {
        &self.parts.method
    }

    pub fn uri(&self) -> &Uri {
        &self.parts.uri
    }

    /// Stage the response that ends this exchange. A later call replaces it.
    pub fn respond(&mut self, response: impl IntoResponse) {
        self.response = Some(response.into_response());
    }

    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }

    /// Reassemble the request and hand back whatever response was staged.
    pub fn into_parts(self) -> (Request<Body>, Option<Response>) {
        (Request::from_parts(self.parts, self.body), self.response)
    }
}

impl std::fmt::Debug for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exchange")
            .field("method", &self.parts.method)
            .field("uri", &self.parts.uri)
            .field("response", &self.response.as_ref().map(|r| r.status()))
            .finish()
    }
}
