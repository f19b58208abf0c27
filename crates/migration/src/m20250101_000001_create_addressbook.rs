//! Create `addressbook` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addressbook::Table)
                    .if_not_exists()
                    .col(string_len(Addressbook::Id, 64).primary_key())
                    .col(text(Addressbook::Name))
                    .col(text_null(Addressbook::Description))
                    .col(timestamp_with_time_zone(Addressbook::CreatedAt))
                    .col(text(Addressbook::CreatedBy))
                    .col(timestamp_with_time_zone(Addressbook::ModifiedAt))
                    .col(text(Addressbook::ModifiedBy))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Addressbook::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Addressbook {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    CreatedBy,
    ModifiedAt,
    ModifiedBy,
}
