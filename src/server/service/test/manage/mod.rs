use crate::{
    model::dashboard::ServerStatus,
    server::{
        error::AppError,
        model::{
            game_mod::CreateGameModParam,
            game_server::CreateGameServerParam,
            manage::{DeleteEntity, EntityKind, NewEntity},
            website::CreateWebsiteParam,
        },
        service::{
            cache::{CacheEvents, CacheKey, DashboardCache},
            dashboard::DashboardService,
            manage::ManageService,
        },
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod delete;
