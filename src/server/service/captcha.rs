//! Arithmetic captcha for the contact form.
//!
//! Challenges are stateless: the caller keeps the expected answer and submits it together
//! with the visitor's answer.

use rand::Rng;

use crate::{model::contact::CaptchaChallengeDto, server::error::AppError};

/// Largest operand of a challenge.
const MAX_OPERAND: i64 = 9;

/// A `left + right` question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptchaChallenge {
    pub left: i64,
    pub right: i64,
}

impl CaptchaChallenge {
    /// Creates a challenge with two random operands in `0..=9`.
    pub fn generate() -> Self {
        let mut rng = rand::rng();

        Self {
            left: rng.random_range(0..=MAX_OPERAND),
            right: rng.random_range(0..=MAX_OPERAND),
        }
    }

    pub fn question(&self) -> String {
        format!("{} + {}", self.left, self.right)
    }

    pub fn answer(&self) -> i64 {
        self.left + self.right
    }

    pub fn into_dto(self) -> CaptchaChallengeDto {
        CaptchaChallengeDto {
            question: self.question(),
            answer: self.answer(),
        }
    }
}

/// Checks a submitted captcha answer against the expected one.
///
/// # Arguments
/// - `answer` - Answer given by the visitor, `None` when missing or not numeric
/// - `expected` - Answer of the displayed challenge, `None` when missing or not numeric
///
/// # Returns
/// - `Ok(())` - Both values are present and equal
/// - `Err(AppError::BadRequest("Invalid captcha"))` - Anything else
pub fn verify(answer: Option<i64>, expected: Option<i64>) -> Result<(), AppError> {
    match (answer, expected) {
        (Some(answer), Some(expected)) if answer == expected => Ok(()),
        _ => Err(AppError::BadRequest("Invalid captcha".to_string())),
    }
}
