use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use service::addressbooks::Org;
use service::pagination::ListParams;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::{AppState, Caller};

#[utoipa::path(
    get, path = "/api/addressbooks/{aid}/org", tag = "orgs",
    params(("aid" = String, Path, description = "Addressbook id"), crate::openapi::ListParamsDoc),
    responses(
        (status = 200, description = "Orgs ordered by id; empty for an unknown addressbook", body = [crate::openapi::OrgDoc])
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Path(aid): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Org>>, JsonApiError> {
    let q = params.resolve(state.limits);
    Ok(Json(state.provider.list_orgs(&aid, &q).await?))
}

#[utoipa::path(
    post, path = "/api/addressbooks/{aid}/org", tag = "orgs",
    params(("aid" = String, Path, description = "Addressbook id")),
    request_body = crate::openapi::OrgDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::OrgDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Addressbook Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Id already taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Path(aid): Path<String>,
    Json(input): Json<Org>,
) -> Result<Json<Org>, JsonApiError> {
    let created = state.provider.create_org(&ctx, &aid, input).await?;
    info!(addressbook = %aid, id = ?created.id, principal = %ctx.principal, "created org");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/api/addressbooks/{aid}/org/{oid}", tag = "orgs",
    params(("aid" = String, Path, description = "Addressbook id"), ("oid" = String, Path, description = "Org id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::OrgDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path((aid, oid)): Path<(String, String)>,
) -> Result<Json<Org>, JsonApiError> {
    Ok(Json(state.provider.read_org(&aid, &oid).await?))
}

#[utoipa::path(
    put, path = "/api/addressbooks/{aid}/org/{oid}", tag = "orgs",
    params(("aid" = String, Path, description = "Addressbook id"), ("oid" = String, Path, description = "Org id")),
    request_body = crate::openapi::OrgDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::OrgDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Path((aid, oid)): Path<(String, String)>,
    Json(input): Json<Org>,
) -> Result<Json<Org>, JsonApiError> {
    let updated = state.provider.update_org(&ctx, &aid, &oid, input).await?;
    info!(addressbook = %aid, id = %oid, principal = %ctx.principal, "updated org");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/addressbooks/{aid}/org/{oid}", tag = "orgs",
    params(("aid" = String, Path, description = "Addressbook id"), ("oid" = String, Path, description = "Org id")),
    responses(
        (status = 204, description = "Deleted together with its addresses"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path((aid, oid)): Path<(String, String)>,
) -> Result<StatusCode, JsonApiError> {
    state.provider.delete_org(&aid, &oid).await?;
    info!(addressbook = %aid, id = %oid, "deleted org");
    Ok(StatusCode::NO_CONTENT)
}
