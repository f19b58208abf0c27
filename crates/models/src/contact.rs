use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub addressbook_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
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
    pub birthday: Option<Date>,
    pub photo_url: Option<String>,
    pub note: Option<String>,
    pub is_favorite: bool,
    pub is_private: bool,
    pub created_at: DateTimeWithTimeZone,
    pub created_by: String,
    pub modified_at: DateTimeWithTimeZone,
    pub modified_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
