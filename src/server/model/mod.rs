//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod contact_request;
pub mod dashboard;
pub mod game_mod;
pub mod game_server;
pub mod manage;
pub mod user;
pub mod website;
