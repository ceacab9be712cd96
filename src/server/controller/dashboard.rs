use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, dashboard::DashboardDto},
    server::{error::AppError, service::dashboard::DashboardService, state::AppState},
};

pub static DASHBOARD_TAG: &str = "dashboard";

#[utoipa::path(
    get,
    path = "/api/dashboard/data",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Websites and game servers with their mods", body = DashboardDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let dashboard = DashboardService::new(&state.db, &state.dashboard_cache)
        .get_dashboard()
        .await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}
