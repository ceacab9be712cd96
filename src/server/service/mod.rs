//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation order, captcha checks and cache invalidation
//! - **Orchestration**: Coordinating repository calls and the identity provider
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod cache;
pub mod captcha;
pub mod contact;
pub mod dashboard;
pub mod manage;

#[cfg(test)]
mod test;
