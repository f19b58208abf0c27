//! Create `contact` table.
//! Keyed by (addressbook_id, id); rows go away with their addressbook.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(string_len(Contact::AddressbookId, 64))
                    .col(string_len(Contact::Id, 64))
                    .col(text_null(Contact::FormattedName))
                    .col(text_null(Contact::FirstName))
                    .col(text_null(Contact::LastName))
                    .col(text_null(Contact::MiddleName))
                    .col(text_null(Contact::Prefix))
                    .col(text_null(Contact::Suffix))
                    .col(text_null(Contact::NickName))
                    .col(text_null(Contact::JobTitle))
                    .col(text_null(Contact::Department))
                    .col(text_null(Contact::Company))
                    .col(text_null(Contact::OrgId))
                    .col(date_null(Contact::Birthday))
                    .col(text_null(Contact::PhotoUrl))
                    .col(text_null(Contact::Note))
                    .col(boolean(Contact::IsFavorite))
                    .col(boolean(Contact::IsPrivate))
                    .col(timestamp_with_time_zone(Contact::CreatedAt))
                    .col(text(Contact::CreatedBy))
                    .col(timestamp_with_time_zone(Contact::ModifiedAt))
                    .col(text(Contact::ModifiedBy))
                    .primary_key(Index::create().col(Contact::AddressbookId).col(Contact::Id))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_addressbook")
                            .from(Contact::Table, Contact::AddressbookId)
                            .to(Addressbook::Table, Addressbook::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contact {
    Table,
    AddressbookId,
    Id,
    FormattedName,
    FirstName,
    LastName,
    MiddleName,
    Prefix,
    Suffix,
    NickName,
    JobTitle,
    Department,
    Company,
    OrgId,
    Birthday,
    PhotoUrl,
    Note,
    IsFavorite,
    IsPrivate,
    CreatedAt,
    CreatedBy,
    ModifiedAt,
    ModifiedBy,
}

#[derive(DeriveIden)]
enum Addressbook { Table, Id }
