use crate::server::{
    data::hotel::HotelRepository,
    model::hotel::{CreateHotelParams, HotelField},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
