//! Create `org` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Org::Table)
                    .if_not_exists()
                    .col(string_len(Org::AddressbookId, 64))
                    .col(string_len(Org::Id, 64))
                    .col(text(Org::Name))
                    .col(text_null(Org::Description))
                    .col(text_null(Org::CostCenter))
                    .col(text_null(Org::StockExchange))
                    .col(text_null(Org::TickerSymbol))
                    .col(string_len(Org::OrgType, 32))
                    .col(text_null(Org::LogoUrl))
                    .col(timestamp_with_time_zone(Org::CreatedAt))
                    .col(text(Org::CreatedBy))
                    .col(timestamp_with_time_zone(Org::ModifiedAt))
                    .col(text(Org::ModifiedBy))
                    .primary_key(Index::create().col(Org::AddressbookId).col(Org::Id))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_org_addressbook")
                            .from(Org::Table, Org::AddressbookId)
                            .to(Addressbook::Table, Addressbook::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Org::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Org {
    Table,
    AddressbookId,
    Id,
    Name,
    Description,
    CostCenter,
    StockExchange,
    TickerSymbol,
    OrgType,
    LogoUrl,
    CreatedAt,
    CreatedBy,
    ModifiedAt,
    ModifiedBy,
}

#[derive(DeriveIden)]
enum Addressbook { Table, Id }
