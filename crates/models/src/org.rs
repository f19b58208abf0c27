use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "org")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub addressbook_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub cost_center: Option<String>,
    pub stock_exchange: Option<String>,
    pub ticker_symbol: Option<String>,
    pub org_type: String,
    pub logo_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub created_by: String,
    pub modified_at: DateTimeWithTimeZone,
    pub modified_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
