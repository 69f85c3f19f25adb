use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::analytics::AnalyticsRepository,
    error::AppError,
    model::analytics::{AnalyticsSnapshot, CreateSnapshotParams},
};

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes and persists a hotel-wide analytics snapshot
    ///
    /// Aggregates counts and revenue sums over the whole database, derives
    /// the per-room and per-reservation rates with zero guards, and ranks
    /// room types and catalog items by popularity. The aggregate reads and
    /// the snapshot insert run in one transaction so the row reflects a
    /// single consistent state.
    ///
    /// # Returns
    /// - `Ok(AnalyticsSnapshot)`: The persisted snapshot
    /// - `Err(AppError)`: Database error, nothing persisted
    pub async fn compute_snapshot(&self) -> Result<AnalyticsSnapshot, AppError> {
        let txn = self.db.begin().await?;
        let repo = AnalyticsRepository::new(&txn);

        let total_reservations = repo.count_reservations().await?;
        let total_customers = repo.count_customers().await?;
        let total_rooms = repo.count_rooms().await?;
        let occupied_rooms = repo.count_occupied_rooms().await?;

        let total_revenue = repo.sum_transaction_amounts().await?;
        let room_revenue = repo.sum_reservation_costs().await?;
        let room_service_revenue = repo.sum_order_costs().await?;

        let average_daily_rate = if total_reservations > 0 {
            room_revenue / total_reservations as f64
        } else {
            0.0
        };
        let revenue_per_available_room = if total_rooms > 0 {
            total_revenue / total_rooms as f64
        } else {
            0.0
        };
        let average_occupancy_rate = if total_rooms > 0 {
            occupied_rooms as f64 / total_rooms as f64 * 100.0
        } else {
            0.0
        };

        let most_popular_room_type = most_popular(repo.room_type_counts().await?);
        let most_popular_service_item =
            most_popular(repo.order_item_counts().await?).map(|id| id.to_string());

        let snapshot = repo
            .insert_snapshot(CreateSnapshotParams {
                date: Utc::now(),
                total_reservations: total_reservations as i32,
                total_customers: total_customers as i32,
                total_revenue,
                room_revenue,
                room_service_revenue,
                occupied_rooms: occupied_rooms as i32,
                total_rooms: total_rooms as i32,
                average_daily_rate,
                revenue_per_available_room,
                average_occupancy_rate,
                most_popular_room_type,
                most_popular_service_item,
            })
            .await?;

        txn.commit().await?;

        Ok(snapshot)
    }
}

/// Picks the highest-count key from group-by pairs
///
/// Equal counts break toward the smaller key so the ranking is deterministic.
/// Returns `None` when there are no rows to rank.
fn most_popular<K: Ord>(counts: Vec<(K, i64)>) -> Option<K> {
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .map(|(key, _)| key)
}
