use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000001_create_customer_table::Customer, m20250901_000002_create_room_table::Room,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::CustomerId))
                    .col(integer(Reservation::RoomId))
                    .col(timestamp(Reservation::CheckInDate))
                    .col(timestamp(Reservation::CheckOutDate))
                    .col(double(Reservation::TotalCost))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_customer_id")
                            .from(Reservation::Table, Reservation::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_room_id")
                            .from(Reservation::Table, Reservation::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    #[sea_orm(iden = "reservations")]
    Table,
    Id,
    CustomerId,
    RoomId,
    CheckInDate,
    CheckOutDate,
    TotalCost,
}
