use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HotelAnalytics::Table)
                    .if_not_exists()
                    .col(pk_auto(HotelAnalytics::Id))
                    .col(timestamp(HotelAnalytics::Date).default(Expr::current_timestamp()))
                    .col(integer(HotelAnalytics::TotalReservations))
                    .col(integer(HotelAnalytics::TotalCustomers))
                    .col(double(HotelAnalytics::TotalRevenue))
                    .col(double(HotelAnalytics::RoomRevenue))
                    .col(double(HotelAnalytics::RoomServiceRevenue))
                    .col(integer(HotelAnalytics::OccupiedRooms))
                    .col(integer(HotelAnalytics::TotalRooms))
                    .col(double(HotelAnalytics::AverageDailyRate))
                    .col(double(HotelAnalytics::RevenuePerAvailableRoom))
                    .col(double(HotelAnalytics::AverageOccupancyRate))
                    .col(string_null(HotelAnalytics::MostPopularRoomType))
                    .col(string_null(HotelAnalytics::MostPopularServiceItem))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HotelAnalytics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HotelAnalytics {
    #[sea_orm(iden = "hotel_analytics")]
    Table,
    Id,
    Date,
    TotalReservations,
    TotalCustomers,
    TotalRevenue,
    RoomRevenue,
    RoomServiceRevenue,
    OccupiedRooms,
    TotalRooms,
    AverageDailyRate,
    RevenuePerAvailableRoom,
    AverageOccupancyRate,
    MostPopularRoomType,
    MostPopularServiceItem,
}
