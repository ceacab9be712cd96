//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to unit
//! test conversions and in-memory logic such as joining mods onto their servers.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let server = fixture::game_server::entity_builder().id(3).build();
//! let game_mod = fixture::game_mod::entity_builder().server_id(3).build();
//! ```

pub mod game_mod;
pub mod game_server;
pub mod website;

pub use game_mod::{entity as game_mod_entity, entity_builder as game_mod_entity_builder};
pub use game_server::{
    entity as game_server_entity, entity_builder as game_server_entity_builder,
};
pub use website::{entity as website_entity, entity_builder as website_entity_builder};
