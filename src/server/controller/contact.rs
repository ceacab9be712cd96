use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        contact::{CaptchaChallengeDto, CreateContactRequestDto},
    },
    server::{
        error::AppError,
        model::contact_request::ContactSubmission,
        service::{captcha::CaptchaChallenge, contact::ContactService},
        state::AppState,
    },
};

pub static CONTACT_TAG: &str = "contact";

#[utoipa::path(
    post,
    path = "/api/contact/create",
    tag = CONTACT_TAG,
    request_body = CreateContactRequestDto,
    responses(
        (status = 200, description = "Contact request stored", body = SuccessDto),
        (status = 400, description = "Invalid captcha or missing fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_contact_request(
    State(state): State<AppState>,
    payload: Result<Json<CreateContactRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    ContactService::new(&state.db)
        .submit(ContactSubmission::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}

/// Issues a fresh arithmetic challenge for the contact form.
#[utoipa::path(
    get,
    path = "/api/contact/captcha",
    tag = CONTACT_TAG,
    responses(
        (status = 200, description = "New captcha challenge", body = CaptchaChallengeDto)
    ),
)]
pub async fn get_captcha() -> impl IntoResponse {
    (StatusCode::OK, Json(CaptchaChallenge::generate().into_dto()))
}
