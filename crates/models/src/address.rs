use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const OWNER_CONTACT: &str = "contact";
pub const OWNER_ORG: &str = "org";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub addressbook_id: String,
    /// `contact` or `org`; an address row belongs to exactly one of them.
    #[sea_orm(primary_key, auto_increment = false)]
    pub owner_kind: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub owner_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub address_type: String,
    pub attribute_type: String,
    pub msg_type: Option<String>,
    pub value: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country_code: i16,
    pub created_at: DateTimeWithTimeZone,
    pub created_by: String,
    pub modified_at: DateTimeWithTimeZone,
    pub modified_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_owner_kind(kind: &str) -> Result<(), ModelError> {
    if kind != OWNER_CONTACT && kind != OWNER_ORG {
        return Err(ModelError::Validation(format!("unknown address owner kind `{kind}`")));
    }
    Ok(())
}
