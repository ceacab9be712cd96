use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        manage::{AddEntityDto, DeleteEntityDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::manage::{DeleteEntity, NewEntity},
        service::manage::ManageService,
        state::AppState,
    },
};

pub static MANAGE_TAG: &str = "manage";

#[utoipa::path(
    post,
    path = "/api/admin/manage",
    tag = MANAGE_TAG,
    request_body = AddEntityDto,
    responses(
        (status = 200, description = "Entity added", body = SuccessDto),
        (status = 400, description = "Invalid type or missing fields", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_entity(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<AddEntityDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session, &state.admin_ids)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let entity = NewEntity::try_from(payload)?;

    ManageService::new(&state.db, &state.cache_events)
        .add(entity)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/manage",
    tag = MANAGE_TAG,
    request_body = DeleteEntityDto,
    responses(
        (status = 200, description = "Entity deleted or did not exist", body = SuccessDto),
        (status = 400, description = "Invalid type or id", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_entity(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<DeleteEntityDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session, &state.admin_ids)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let target = DeleteEntity::try_from(payload)?;

    ManageService::new(&state.db, &state.cache_events)
        .delete(target)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}
