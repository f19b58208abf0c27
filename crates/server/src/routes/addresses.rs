//! Addresses owned by a contact or by an org. Both owner kinds expose the
//! same five operations; the handlers differ only in which provider call they make.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use service::addressbooks::Address;
use service::pagination::ListParams;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::{AppState, Caller};

#[utoipa::path(
    get, path = "/api/addressbooks/{aid}/contact/{cid}/address", tag = "addresses",
    params(
        ("aid" = String, Path, description = "Addressbook id"),
        ("cid" = String, Path, description = "Contact id"),
        crate::openapi::ListParamsDoc
    ),
    responses((status = 200, description = "Addresses ordered by id", body = [crate::openapi::AddressDoc]))
)]
pub async fn contact_list(
    State(state): State<AppState>,
    Path((aid, cid)): Path<(String, String)>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Address>>, JsonApiError> {
    let q = params.resolve(state.limits);
    Ok(Json(state.provider.list_addresses(&aid, &cid, &q).await?))
}

#[utoipa::path(
    post, path = "/api/addressbooks/{aid}/contact/{cid}/address", tag = "addresses",
    params(("aid" = String, Path, description = "Addressbook id"), ("cid" = String, Path, description = "Contact id")),
    request_body = crate::openapi::AddressDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::AddressDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Contact Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Id already taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn contact_create(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Path((aid, cid)): Path<(String, String)>,
    Json(input): Json<Address>,
) -> Result<Json<Address>, JsonApiError> {
    let created = state.provider.create_address(&ctx, &aid, &cid, input).await?;
    info!(addressbook = %aid, contact = %cid, id = ?created.id, "created contact address");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/api/addressbooks/{aid}/contact/{cid}/address/{adrid}", tag = "addresses",
    params(
        ("aid" = String, Path, description = "Addressbook id"),
        ("cid" = String, Path, description = "Contact id"),
        ("adrid" = String, Path, description = "Address id")
    ),
    responses(
        (status = 200, description = "OK", body = crate::openapi::AddressDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn contact_read(
    State(state): State<AppState>,
    Path((aid, cid, adrid)): Path<(String, String, String)>,
) -> Result<Json<Address>, JsonApiError> {
    Ok(Json(state.provider.read_address(&aid, &cid, &adrid).await?))
}

#[utoipa::path(
    put, path = "/api/addressbooks/{aid}/contact/{cid}/address/{adrid}", tag = "addresses",
    params(
        ("aid" = String, Path, description = "Addressbook id"),
        ("cid" = String, Path, description = "Contact id"),
        ("adrid" = String, Path, description = "Address id")
    ),
    request_body = crate::openapi::AddressDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::AddressDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn contact_update(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Path((aid, cid, adrid)): Path<(String, String, String)>,
    Json(input): Json<Address>,
) -> Result<Json<Address>, JsonApiError> {
    let updated = state.provider.update_address(&ctx, &aid, &cid, &adrid, input).await?;
    info!(addressbook = %aid, contact = %cid, id = %adrid, "updated contact address");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/addressbooks/{aid}/contact/{cid}/address/{adrid}", tag = "addresses",
    params(
        ("aid" = String, Path, description = "Addressbook id"),
        ("cid" = String, Path, description = "Contact id"),
        ("adrid" = String, Path, description = "Address id")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn contact_delete(
    State(state): State<AppState>,
    Path((aid, cid, adrid)): Path<(String, String, String)>,
) -> Result<StatusCode, JsonApiError> {
    state.provider.delete_address(&aid, &cid, &adrid).await?;
    info!(addressbook = %aid, contact = %cid, id = %adrid, "deleted contact address");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/api/addressbooks/{aid}/org/{oid}/address", tag = "addresses",
    params(
        ("aid" = String, Path, description = "Addressbook id"),
        ("oid" = String, Path, description = "Org id"),
        crate::openapi::ListParamsDoc
    ),
    responses((status = 200, description = "Addresses ordered by id", body = [crate::openapi::AddressDoc]))
)]
pub async fn org_list(
    State(state): State<AppState>,
    Path((aid, oid)): Path<(String, String)>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Address>>, JsonApiError> {
    let q = params.resolve(state.limits);
    Ok(Json(state.provider.list_org_addresses(&aid, &oid, &q).await?))
}

#[utoipa::path(
    post, path = "/api/addressbooks/{aid}/org/{oid}/address", tag = "addresses",
    params(("aid" = String, Path, description = "Addressbook id"), ("oid" = String, Path, description = "Org id")),
    request_body = crate::openapi::AddressDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::AddressDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Org Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Id already taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn org_create(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Path((aid, oid)): Path<(String, String)>,
    Json(input): Json<Address>,
) -> Result<Json<Address>, JsonApiError> {
    let created = state.provider.create_org_address(&ctx, &aid, &oid, input).await?;
    info!(addressbook = %aid, org = %oid, id = ?created.id, "created org address");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/api/addressbooks/{aid}/org/{oid}/address/{adrid}", tag = "addresses",
    params(
        ("aid" = String, Path, description = "Addressbook id"),
        ("oid" = String, Path, description = "Org id"),
        ("adrid" = String, Path, description = "Address id")
    ),
    responses(
        (status = 200, description = "OK", body = crate::openapi::AddressDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn org_read(
    State(state): State<AppState>,
    Path((aid, oid, adrid)): Path<(String, String, String)>,
) -> Result<Json<Address>, JsonApiError> {
    Ok(Json(state.provider.read_org_address(&aid, &oid, &adrid).await?))
}

#[utoipa::path(
    put, path = "/api/addressbooks/{aid}/org/{oid}/address/{adrid}", tag = "addresses",
    params(
        ("aid" = String, Path, description = "Addressbook id"),
        ("oid" = String, Path, description = "Org id"),
        ("adrid" = String, Path, description = "Address id")
    ),
    request_body = crate::openapi::AddressDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::AddressDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn org_update(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Path((aid, oid, adrid)): Path<(String, String, String)>,
    Json(input): Json<Address>,
) -> Result<Json<Address>, JsonApiError> {
    let updated = state.provider.update_org_address(&ctx, &aid, &oid, &adrid, input).await?;
    info!(addressbook = %aid, org = %oid, id = %adrid, "updated org address");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/addressbooks/{aid}/org/{oid}/address/{adrid}", tag = "addresses",
    params(
        ("aid" = String, Path, description = "Addressbook id"),
        ("oid" = String, Path, description = "Org id"),
        ("adrid" = String, Path, description = "Address id")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn org_delete(
    State(state): State<AppState>,
    Path((aid, oid, adrid)): Path<(String, String, String)>,
) -> Result<StatusCode, JsonApiError> {
    state.provider.delete_org_address(&aid, &oid, &adrid).await?;
    info!(addressbook = %aid, org = %oid, id = %adrid, "deleted org address");
    Ok(StatusCode::NO_CONTENT)
}
