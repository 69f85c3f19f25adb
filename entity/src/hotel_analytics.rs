use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hotel_analytics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: DateTimeUtc,
    pub total_reservations: i32,
    pub total_customers: i32,
    pub total_revenue: f64,
    pub room_revenue: f64,
    pub room_service_revenue: f64,
    pub occupied_rooms: i32,
    pub total_rooms: i32,
    pub average_daily_rate: f64,
    pub revenue_per_available_room: f64,
    pub average_occupancy_rate: f64,
    pub most_popular_room_type: Option<String>,
    pub most_popular_service_item: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
