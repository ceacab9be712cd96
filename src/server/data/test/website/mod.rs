use crate::server::{
    data::website::WebsiteRepository, error::AppError, model::website::CreateWebsiteParam,
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
