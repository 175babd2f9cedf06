use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create item_requests table
        manager
            .create_table(
                Table::create()
                    .table(ItemRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ItemRequests::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ItemRequests::RequestorName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ItemRequests::ItemRequested)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ItemRequests::CreatedDate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ItemRequests::LastEditedDate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ItemRequests::Status)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing sorts by created_date, newest first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_item_requests_created_date")
                    .table(ItemRequests::Table)
                    .col(ItemRequests::CreatedDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_item_requests_status")
                    .table(ItemRequests::Table)
                    .col(ItemRequests::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ItemRequests {
    Table,
    Id,
    RequestorName,
    ItemRequested,
    CreatedDate,
    LastEditedDate,
    Status,
}
