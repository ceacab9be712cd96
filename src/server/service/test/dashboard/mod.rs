use crate::server::{
    error::AppError,
    service::{
        cache::{CacheEvents, CacheKey, DashboardCache},
        dashboard::DashboardService,
    },
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod get_dashboard;
