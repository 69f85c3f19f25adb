use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "room_service_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room_service_order_item::Entity")]
    RoomServiceOrderItem,
}

impl Related<super::room_service_order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomServiceOrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
