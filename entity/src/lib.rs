//! SeaORM entity models for the House of Cuddles database.
//!
//! Each module mirrors one table created by the `migration` crate. The `prelude`
//! module re-exports every entity under its table-friendly name.

pub mod prelude;

pub mod contact_request;
pub mod game_mod;
pub mod game_server;
pub mod website;
