use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomServiceItem::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomServiceItem::Id))
                    .col(string(RoomServiceItem::Name))
                    .col(text_null(RoomServiceItem::Description))
                    .col(double(RoomServiceItem::Price))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomServiceItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomServiceItem {
    #[sea_orm(iden = "room_service_items")]
    Table,
    Id,
    Name,
    Description,
    Price,
}
