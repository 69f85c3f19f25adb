use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000004_create_reservation_table::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomServiceOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomServiceOrder::Id))
                    .col(integer(RoomServiceOrder::ReservationId))
                    .col(double(RoomServiceOrder::TotalCost))
                    .col(string(RoomServiceOrder::Status).default("Pending"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_service_order_reservation_id")
                            .from(RoomServiceOrder::Table, RoomServiceOrder::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomServiceOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomServiceOrder {
    #[sea_orm(iden = "room_service_orders")]
    Table,
    Id,
    ReservationId,
    TotalCost,
    Status,
}
