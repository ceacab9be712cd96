use crate::{
    model::dashboard::ServerStatus,
    server::{
        data::game_server::GameServerRepository, error::AppError,
        model::game_server::CreateGameServerParam,
    },
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
