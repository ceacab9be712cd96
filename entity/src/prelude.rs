pub use super::contact_request::Entity as ContactRequest;
pub use super::game_mod::Entity as GameMod;
pub use super::game_server::Entity as GameServer;
pub use super::website::Entity as Website;
