use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(integer_uniq(Room::RoomNumber))
                    .col(string(Room::RoomType))
                    .col(double(Room::PricePerNight))
                    .col(boolean(Room::IsAvailable).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    #[sea_orm(iden = "rooms")]
    Table,
    Id,
    RoomNumber,
    RoomType,
    PricePerNight,
    IsAvailable,
}
