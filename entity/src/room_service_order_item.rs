use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "room_service_order_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub room_service_order_id: i32,
    pub room_service_item_id: i32,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room_service_order::Entity",
        from = "Column::RoomServiceOrderId",
        to = "super::room_service_order::Column::Id"
    )]
    RoomServiceOrder,
    #[sea_orm(
        belongs_to = "super::room_service_item::Entity",
        from = "Column::RoomServiceItemId",
        to = "super::room_service_item::Column::Id"
    )]
    RoomServiceItem,
}

impl Related<super::room_service_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomServiceOrder.def()
    }
}

impl Related<super::room_service_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomServiceItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
