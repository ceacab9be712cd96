//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table of the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. Every table is
//! written by single inserts and deletes by id; nothing is ever updated.

pub mod contact_request;
pub mod game_mod;
pub mod game_server;
pub mod website;

#[cfg(test)]
mod test;
