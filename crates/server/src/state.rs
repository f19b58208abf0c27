use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use service::addressbooks::{RequestContext, SharedProvider};
use service::pagination::ListLimits;
use std::convert::Infallible;

/// Header naming the caller recorded in audit stamps.
pub const PRINCIPAL_HEADER: &str = "x-principal";

/// Router state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub provider: SharedProvider,
    pub limits: ListLimits,
}

impl AppState {
    pub fn new(provider: SharedProvider, limits: ListLimits) -> Self { Self { provider, limits } }
}

/// Extracts the caller's [`RequestContext`] from `X-Principal`, falling back to anonymous.
#[derive(Debug, Clone)]
pub struct Caller(pub RequestContext);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = parts
            .headers
            .get(PRINCIPAL_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(RequestContext::new)
            .unwrap_or_default();
        Ok(Caller(ctx))
    }
}
