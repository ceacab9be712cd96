//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let website = factory::create_website(&db).await?;
//!     let (server, mods) = factory::helpers::create_server_with_mods(&db, 2).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let server = factory::game_server::GameServerFactory::new(&db)
//!     .name("Valheim Vikings")
//!     .status("offline")
//!     .build()
//!     .await?;
//! ```

pub mod contact_request;
pub mod game_mod;
pub mod game_server;
pub mod helpers;
pub mod website;

pub use contact_request::create_contact_request;
pub use game_mod::create_mod;
pub use game_server::create_server;
pub use website::create_website;
