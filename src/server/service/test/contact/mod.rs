use crate::server::{
    error::AppError, model::contact_request::ContactSubmission, service::contact::ContactService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod submit;

fn submission(answer: i64, expected: i64) -> ContactSubmission {
    ContactSubmission {
        name: Some("Bun".to_string()),
        email: Some("bun@example.com".to_string()),
        request_type: Some("game_server".to_string()),
        message: Some("Could you host a Valheim server?".to_string()),
        captcha_answer: Some(answer),
        captcha_expected: Some(expected),
    }
}
