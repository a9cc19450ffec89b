use crate::{
    model::room::RoomSize,
    server::{data::room::RoomRepository, error::AppError, model::room::CreateRoomParams},
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find;
