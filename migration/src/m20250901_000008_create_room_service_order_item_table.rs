use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000006_create_room_service_item_table::RoomServiceItem,
    m20250901_000007_create_room_service_order_table::RoomServiceOrder,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomServiceOrderItem::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomServiceOrderItem::Id))
                    .col(integer(RoomServiceOrderItem::RoomServiceOrderId))
                    .col(integer(RoomServiceOrderItem::RoomServiceItemId))
                    .col(integer(RoomServiceOrderItem::Quantity).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_service_order_item_order_id")
                            .from(
                                RoomServiceOrderItem::Table,
                                RoomServiceOrderItem::RoomServiceOrderId,
                            )
                            .to(RoomServiceOrder::Table, RoomServiceOrder::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_service_order_item_item_id")
                            .from(
                                RoomServiceOrderItem::Table,
                                RoomServiceOrderItem::RoomServiceItemId,
                            )
                            .to(RoomServiceItem::Table, RoomServiceItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomServiceOrderItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomServiceOrderItem {
    #[sea_orm(iden = "room_service_order_items")]
    Table,
    Id,
    RoomServiceOrderId,
    RoomServiceItemId,
    Quantity,
}
