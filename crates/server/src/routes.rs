use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod addressbooks;
pub mod contacts;
pub mod orgs;
pub mod addresses;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// REST routes under `/api/addressbooks`.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/addressbooks", get(addressbooks::list).post(addressbooks::create))
        .route("/api/addressbooks/", get(addressbooks::list).post(addressbooks::create))
        .route("/api/addressbooks/allContacts", get(addressbooks::list_all_contacts))
        .route("/api/addressbooks/allOrgs", get(addressbooks::list_all_orgs))
        .route(
            "/api/addressbooks/:aid",
            get(addressbooks::read).put(addressbooks::update).delete(addressbooks::delete),
        )
        .route("/api/addressbooks/:aid/contact", get(contacts::list).post(contacts::create))
        .route(
            "/api/addressbooks/:aid/contact/:cid",
            get(contacts::read).put(contacts::update).delete(contacts::delete),
        )
        .route(
            "/api/addressbooks/:aid/contact/:cid/address",
            get(addresses::contact_list).post(addresses::contact_create),
        )
        .route(
            "/api/addressbooks/:aid/contact/:cid/address/:adrid",
            get(addresses::contact_read).put(addresses::contact_update).delete(addresses::contact_delete),
        )
        .route("/api/addressbooks/:aid/org", get(orgs::list).post(orgs::create))
        .route(
            "/api/addressbooks/:aid/org/:oid",
            get(orgs::read).put(orgs::update).delete(orgs::delete),
        )
        .route(
            "/api/addressbooks/:aid/org/:oid/address",
            get(addresses::org_list).post(addresses::org_create),
        )
        .route(
            "/api/addressbooks/:aid/org/:oid/address/:adrid",
            get(addresses::org_read).put(addresses::org_update).delete(addresses::org_delete),
        )
}

/// Build the full application router: health, OpenAPI document and the REST API.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(api_routes())
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request carrying method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use service::addressbooks::InMemoryServiceProvider;
    use service::pagination::ListLimits;
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        let state = AppState::new(Arc::new(InMemoryServiceProvider::new()), ListLimits::default());
        build_router(state, CorsLayer::very_permissive())
    }

    async fn json_body(res: axum::response::Response) -> anyhow::Result<serde_json::Value> {
        let bytes = to_bytes(res.into_body(), usize::MAX).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    #[tokio::test]
    async fn unknown_addressbook_is_json_404() -> anyhow::Result<()> {
        let res = app()
            .oneshot(Request::get("/api/addressbooks/nope").body(Body::empty())?)
            .await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = json_body(res).await?;
        assert_eq!(body["error"], "Not Found");
        Ok(())
    }

    #[tokio::test]
    async fn aggregate_routes_win_over_id_segment() -> anyhow::Result<()> {
        let res = app()
            .oneshot(Request::get("/api/addressbooks/allContacts").body(Body::empty())?)
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res).await?, serde_json::json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn collection_root_accepts_trailing_slash() -> anyhow::Result<()> {
        let app = app();
        let req = Request::post("/api/addressbooks/")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"id":"ab1","name":"Acme"}"#))?;
        let res = app.clone().oneshot(req).await?;
        assert_eq!(res.status(), StatusCode::OK);

        let res = app
            .oneshot(Request::get("/api/addressbooks/").body(Body::empty())?)
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res).await?;
        assert_eq!(body[0]["id"], "ab1");
        Ok(())
    }

    #[tokio::test]
    async fn principal_header_is_stamped() -> anyhow::Result<()> {
        let req = Request::post("/api/addressbooks")
            .header("content-type", "application/json")
            .header("X-Principal", "alice")
            .body(Body::from(r#"{"id":"ab1","name":"Acme"}"#))?;
        let res = app().oneshot(req).await?;
        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res).await?;
        assert_eq!(body["createdBy"], "alice");
        assert_eq!(body["modifiedBy"], "alice");
        Ok(())
    }

    #[tokio::test]
    async fn openapi_document_lists_paths() -> anyhow::Result<()> {
        let res = app()
            .oneshot(Request::get("/api-docs/openapi.json").body(Body::empty())?)
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res).await?;
        assert!(body["paths"]["/api/addressbooks/{aid}/org/{oid}/address/{adrid}"].is_object());
        Ok(())
    }
}
