use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000003_create_room_table::Room,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(string(Booking::Id).primary_key())
                    .col(string(Booking::UserId))
                    .col(string(Booking::HotelId))
                    .col(string(Booking::RoomId))
                    .col(timestamp_with_time_zone(Booking::FromDate))
                    .col(timestamp_with_time_zone(Booking::ToDate))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(boolean(Booking::Cancelled).default(false))
                    .col(timestamp_with_time_zone_null(Booking::CancelledAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_room_id")
                            .from(Booking::Table, Booking::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Admission looks up active bookings per room on every create.
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_room_active")
                    .table(Booking::Table)
                    .col(Booking::RoomId)
                    .col(Booking::Cancelled)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_user_id")
                    .table(Booking::Table)
                    .col(Booking::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_hotel_id")
                    .table(Booking::Table)
                    .col(Booking::HotelId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    UserId,
    HotelId,
    RoomId,
    FromDate,
    ToDate,
    CreatedDate,
    Cancelled,
    CancelledAt,
}
