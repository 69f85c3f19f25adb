//! Read-side aggregates and snapshot persistence for analytics.
//!
//! The aggregate queries here are plain counts, sums, and group-by counts;
//! ranking and zero-guarding live in the analytics service. Sums over empty
//! tables come back as NULL from SQLite and are mapped to 0 here.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::server::model::analytics::{AnalyticsSnapshot, CreateSnapshotParams};

pub struct AnalyticsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AnalyticsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Counts all reservations
    pub async fn count_reservations(&self) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find().count(self.db).await
    }

    /// Counts all customers
    pub async fn count_customers(&self) -> Result<u64, DbErr> {
        entity::prelude::Customer::find().count(self.db).await
    }

    /// Counts all rooms
    pub async fn count_rooms(&self) -> Result<u64, DbErr> {
        entity::prelude::Room::find().count(self.db).await
    }

    /// Counts rooms whose availability flag is false
    pub async fn count_occupied_rooms(&self) -> Result<u64, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::IsAvailable.eq(false))
            .count(self.db)
            .await
    }

    /// Sums all transaction amounts, 0 when there are none
    pub async fn sum_transaction_amounts(&self) -> Result<f64, DbErr> {
        let total: Option<Option<f64>> = entity::prelude::Transaction::find()
            .select_only()
            .column_as(entity::transaction::Column::Amount.sum(), "total")
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0.0))
    }

    /// Sums all reservation costs, 0 when there are none
    pub async fn sum_reservation_costs(&self) -> Result<f64, DbErr> {
        let total: Option<Option<f64>> = entity::prelude::Reservation::find()
            .select_only()
            .column_as(entity::reservation::Column::TotalCost.sum(), "total")
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0.0))
    }

    /// Sums all room service order totals, 0 when there are none
    pub async fn sum_order_costs(&self) -> Result<f64, DbErr> {
        let total: Option<Option<f64>> = entity::prelude::RoomServiceOrder::find()
            .select_only()
            .column_as(entity::room_service_order::Column::TotalCost.sum(), "total")
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0.0))
    }

    /// Counts rooms per room type
    ///
    /// # Returns
    /// - `Ok(Vec<(String, i64)>)`: Room type and count pairs, unordered
    /// - `Err(DbErr)`: Database error
    pub async fn room_type_counts(&self) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::Room::find()
            .select_only()
            .column(entity::room::Column::RoomType)
            .column_as(entity::room::Column::Id.count(), "count")
            .group_by(entity::room::Column::RoomType)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Counts order lines per catalog item
    ///
    /// Each line counts once regardless of its quantity.
    ///
    /// # Returns
    /// - `Ok(Vec<(i32, i64)>)`: Item ID and line count pairs, unordered
    /// - `Err(DbErr)`: Database error
    pub async fn order_item_counts(&self) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::RoomServiceOrderItem::find()
            .select_only()
            .column(entity::room_service_order_item::Column::RoomServiceItemId)
            .column_as(entity::room_service_order_item::Column::Id.count(), "count")
            .group_by(entity::room_service_order_item::Column::RoomServiceItemId)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Persists a computed snapshot as a new immutable row
    ///
    /// # Returns
    /// - `Ok(AnalyticsSnapshot)`: The persisted snapshot
    /// - `Err(DbErr)`: Database error
    pub async fn insert_snapshot(
        &self,
        params: CreateSnapshotParams,
    ) -> Result<AnalyticsSnapshot, DbErr> {
        let snapshot = entity::hotel_analytics::ActiveModel {
            date: ActiveValue::Set(params.date),
            total_reservations: ActiveValue::Set(params.total_reservations),
            total_customers: ActiveValue::Set(params.total_customers),
            total_revenue: ActiveValue::Set(params.total_revenue),
            room_revenue: ActiveValue::Set(params.room_revenue),
            room_service_revenue: ActiveValue::Set(params.room_service_revenue),
            occupied_rooms: ActiveValue::Set(params.occupied_rooms),
            total_rooms: ActiveValue::Set(params.total_rooms),
            average_daily_rate: ActiveValue::Set(params.average_daily_rate),
            revenue_per_available_room: ActiveValue::Set(params.revenue_per_available_room),
            average_occupancy_rate: ActiveValue::Set(params.average_occupancy_rate),
            most_popular_room_type: ActiveValue::Set(params.most_popular_room_type),
            most_popular_service_item: ActiveValue::Set(params.most_popular_service_item),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AnalyticsSnapshot::from_entity(snapshot))
    }
}
