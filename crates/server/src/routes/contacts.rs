use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use service::addressbooks::Contact;
use service::pagination::ListParams;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::{AppState, Caller};

#[utoipa::path(
    get, path = "/api/addressbooks/{aid}/contact", tag = "contacts",
    params(("aid" = String, Path, description = "Addressbook id"), crate::openapi::ListParamsDoc),
    responses(
        (status = 200, description = "Contacts ordered by id; empty for an unknown addressbook", body = [crate::openapi::ContactDoc])
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Path(aid): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Contact>>, JsonApiError> {
    let q = params.resolve(state.limits);
    Ok(Json(state.provider.list_contacts(&aid, &q).await?))
}

#[utoipa::path(
    post, path = "/api/addressbooks/{aid}/contact", tag = "contacts",
    params(("aid" = String, Path, description = "Addressbook id")),
    request_body = crate::openapi::ContactDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ContactDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Addressbook Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Id already taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Path(aid): Path<String>,
    Json(input): Json<Contact>,
) -> Result<Json<Contact>, JsonApiError> {
    let created = state.provider.create_contact(&ctx, &aid, input).await?;
    info!(addressbook = %aid, id = ?created.id, principal = %ctx.principal, "created contact");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/api/addressbooks/{aid}/contact/{cid}", tag = "contacts",
    params(("aid" = String, Path, description = "Addressbook id"), ("cid" = String, Path, description = "Contact id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ContactDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path((aid, cid)): Path<(String, String)>,
) -> Result<Json<Contact>, JsonApiError> {
    Ok(Json(state.provider.read_contact(&aid, &cid).await?))
}

#[utoipa::path(
    put, path = "/api/addressbooks/{aid}/contact/{cid}", tag = "contacts",
    params(("aid" = String, Path, description = "Addressbook id"), ("cid" = String, Path, description = "Contact id")),
    request_body = crate::openapi::ContactDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ContactDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Path((aid, cid)): Path<(String, String)>,
    Json(input): Json<Contact>,
) -> Result<Json<Contact>, JsonApiError> {
    let updated = state.provider.update_contact(&ctx, &aid, &cid, input).await?;
    info!(addressbook = %aid, id = %cid, principal = %ctx.principal, "updated contact");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/addressbooks/{aid}/contact/{cid}", tag = "contacts",
    params(("aid" = String, Path, description = "Addressbook id"), ("cid" = String, Path, description = "Contact id")),
    responses(
        (status = 204, description = "Deleted together with its addresses"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path((aid, cid)): Path<(String, String)>,
) -> Result<StatusCode, JsonApiError> {
    state.provider.delete_contact(&aid, &cid).await?;
    info!(addressbook = %aid, id = %cid, "deleted contact");
    Ok(StatusCode::NO_CONTENT)
}
