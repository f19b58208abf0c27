use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use service::addressbooks::{Addressbook, Contact, Org};
use service::pagination::ListParams;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::{AppState, Caller};

#[utoipa::path(
    get, path = "/api/addressbooks", tag = "addressbooks",
    params(crate::openapi::ListParamsDoc),
    responses(
        (status = 200, description = "Addressbooks ordered by id", body = [crate::openapi::AddressbookDoc]),
        (status = 500, description = "Backend failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Addressbook>>, JsonApiError> {
    let q = params.resolve(state.limits);
    let list = state.provider.list(&q).await?;
    info!(count = list.len(), query = %q.query, query_type = %q.query_type, "list addressbooks");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/api/addressbooks", tag = "addressbooks",
    request_body = crate::openapi::AddressbookDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::AddressbookDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Id already taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Json(input): Json<Addressbook>,
) -> Result<Json<Addressbook>, JsonApiError> {
    let created = state.provider.create(&ctx, input).await?;
    info!(id = ?created.id, principal = %ctx.principal, "created addressbook");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/api/addressbooks/{aid}", tag = "addressbooks",
    params(("aid" = String, Path, description = "Addressbook id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::AddressbookDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Addressbook>, JsonApiError> {
    Ok(Json(state.provider.read(&id).await?))
}

#[utoipa::path(
    put, path = "/api/addressbooks/{aid}", tag = "addressbooks",
    params(("aid" = String, Path, description = "Addressbook id")),
    request_body = crate::openapi::AddressbookDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::AddressbookDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Caller(ctx): Caller,
    Path(id): Path<String>,
    Json(input): Json<Addressbook>,
) -> Result<Json<Addressbook>, JsonApiError> {
    let updated = state.provider.update(&ctx, &id, input).await?;
    info!(id = %id, principal = %ctx.principal, "updated addressbook");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/addressbooks/{aid}", tag = "addressbooks",
    params(("aid" = String, Path, description = "Addressbook id")),
    responses(
        (status = 204, description = "Deleted together with its contacts, orgs and addresses"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.provider.delete(&id).await?;
    info!(id = %id, "deleted addressbook");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/api/addressbooks/allContacts", tag = "addressbooks",
    params(crate::openapi::ListParamsDoc),
    responses(
        (status = 200, description = "Contacts of all addressbooks", body = [crate::openapi::ContactDoc])
    )
)]
pub async fn list_all_contacts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Contact>>, JsonApiError> {
    let q = params.resolve(state.limits);
    Ok(Json(state.provider.list_all_contacts(&q).await?))
}

#[utoipa::path(
    get, path = "/api/addressbooks/allOrgs", tag = "addressbooks",
    params(crate::openapi::ListParamsDoc),
    responses(
        (status = 200, description = "Orgs of all addressbooks", body = [crate::openapi::OrgDoc])
    )
)]
pub async fn list_all_orgs(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Org>>, JsonApiError> {
    let q = params.resolve(state.limits);
    Ok(Json(state.provider.list_all_orgs(&q).await?))
}
