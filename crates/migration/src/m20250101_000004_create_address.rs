//! Create `address` table.
//! One table serves contact and org addresses; `owner_kind` tells them apart
//! so an address can never hang off both.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(string_len(Address::AddressbookId, 64))
                    .col(string_len(Address::OwnerKind, 16))
                    .col(string_len(Address::OwnerId, 64))
                    .col(string_len(Address::Id, 64))
                    .col(string_len(Address::AddressType, 16))
                    .col(string_len(Address::AttributeType, 16))
                    .col(string_len_null(Address::MsgType, 16))
                    .col(text_null(Address::Value))
                    .col(text_null(Address::Street))
                    .col(text_null(Address::PostalCode))
                    .col(text_null(Address::City))
                    .col(small_integer(Address::CountryCode).default(0))
                    .col(timestamp_with_time_zone(Address::CreatedAt))
                    .col(text(Address::CreatedBy))
                    .col(timestamp_with_time_zone(Address::ModifiedAt))
                    .col(text(Address::ModifiedBy))
                    .primary_key(
                        Index::create()
                            .col(Address::AddressbookId)
                            .col(Address::OwnerKind)
                            .col(Address::OwnerId)
                            .col(Address::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_addressbook")
                            .from(Address::Table, Address::AddressbookId)
                            .to(Addressbook::Table, Addressbook::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Address::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Address {
    Table,
    AddressbookId,
    OwnerKind,
    OwnerId,
    Id,
    AddressType,
    AttributeType,
    MsgType,
    Value,
    Street,
    PostalCode,
    City,
    CountryCode,
    CreatedAt,
    CreatedBy,
    ModifiedAt,
    ModifiedBy,
}

#[derive(DeriveIden)]
enum Addressbook { Table, Id }
