use serde::Serialize;
use utoipa::{IntoParams, OpenApi, ToSchema};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc {
    /// Short title such as `Not Found`.
    pub error: String,
    pub detail: Option<String>,
}

/// Query parameters accepted by every list route.
#[derive(Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListParamsDoc {
    /// Case-insensitive substring filter; empty matches everything.
    pub query: Option<String>,
    /// Accepted for compatibility; does not change matching.
    pub query_type: Option<String>,
    /// Offset of the first item, default 0.
    pub position: Option<u32>,
    /// Page size, default 25, capped at the configured maximum.
    pub size: Option<u32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditDoc {
    pub created_at: Option<String>,
    pub created_by: Option<String>,
    pub modified_at: Option<String>,
    pub modified_by: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressbookDoc {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub audit: AuditDoc,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDoc {
    pub id: Option<String>,
    #[serde(rename = "fn")]
    pub formatted_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub nick_name: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub company: Option<String>,
    pub org_id: Option<String>,
    /// ISO date, e.g. `1990-04-01`.
    pub birthday: Option<String>,
    pub photo_url: Option<String>,
    pub note: Option<String>,
    pub is_favorite: bool,
    pub is_private: bool,
    #[serde(flatten)]
    pub audit: AuditDoc,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrgDoc {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub cost_center: Option<String>,
    pub stock_exchange: Option<String>,
    pub ticker_symbol: Option<String>,
    /// CLUB, COMPANY, COOPERATION, FOUNDATION, LTD, NGO, OTHER, PUBLIC_ORGANIZATION or SOLE_PROPRIETORSHIP.
    pub org_type: String,
    pub logo_url: Option<String>,
    #[serde(flatten)]
    pub audit: AuditDoc,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressDoc {
    pub id: Option<String>,
    /// PHONE, EMAIL, WEB, MESSAGING or POSTAL.
    pub address_type: String,
    /// HOME, WORK or OTHER.
    pub attribute_type: String,
    /// Required for MESSAGING: TWITTER, FACEBOOK, FLICKR, SKYPE, LINKEDIN or OTHER.
    pub msg_type: Option<String>,
    pub value: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country_code: i16,
    #[serde(flatten)]
    pub audit: AuditDoc,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::addressbooks::list,
        crate::routes::addressbooks::create,
        crate::routes::addressbooks::read,
        crate::routes::addressbooks::update,
        crate::routes::addressbooks::delete,
        crate::routes::addressbooks::list_all_contacts,
        crate::routes::addressbooks::list_all_orgs,
        crate::routes::contacts::list,
        crate::routes::contacts::create,
        crate::routes::contacts::read,
        crate::routes::contacts::update,
        crate::routes::contacts::delete,
        crate::routes::orgs::list,
        crate::routes::orgs::create,
        crate::routes::orgs::read,
        crate::routes::orgs::update,
        crate::routes::orgs::delete,
        crate::routes::addresses::contact_list,
        crate::routes::addresses::contact_create,
        crate::routes::addresses::contact_read,
        crate::routes::addresses::contact_update,
        crate::routes::addresses::contact_delete,
        crate::routes::addresses::org_list,
        crate::routes::addresses::org_create,
        crate::routes::addresses::org_read,
        crate::routes::addresses::org_update,
        crate::routes::addresses::org_delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            AuditDoc,
            AddressbookDoc,
            ContactDoc,
            OrgDoc,
            AddressDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "addressbooks"),
        (name = "contacts"),
        (name = "orgs"),
        (name = "addresses")
    )
)]
pub struct ApiDoc;
