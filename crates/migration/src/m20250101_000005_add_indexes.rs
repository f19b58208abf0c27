//! Secondary indexes for cross-addressbook listings ordered by entity id.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contact_id")
                    .table(Contact::Table)
                    .col(Contact::Id)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_org_id")
                    .table(Org::Table)
                    .col(Org::Id)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(Index::drop().name("idx_org_id").table(Org::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_contact_id").table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contact { Table, Id }

#[derive(DeriveIden)]
enum Org { Table, Id }
