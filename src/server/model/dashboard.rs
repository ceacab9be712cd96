//! Dashboard aggregate domain model
//!
//! Joins the flat website, game server and mod listings into the payload rendered by
//! the public dashboard and the admin back office.

use std::collections::HashMap;

use crate::{
    model::dashboard::{DashboardDto, GameServerDto},
    server::model::{game_mod::GameMod, game_server::GameServer, website::Website},
};

/// A game server together with the mods that reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameServerWithMods {
    pub server: GameServer,
    pub mods: Vec<GameMod>,
}

impl GameServerWithMods {
    pub fn into_dto(self) -> GameServerDto {
        GameServerDto {
            id: self.server.id,
            name: self.server.name,
            game: self.server.game,
            description: self.server.description,
            status: self.server.status,
            created_at: self.server.created_at,
            mods: self.mods.into_iter().map(GameMod::into_dto).collect(),
        }
    }
}

/// Combined read model of everything the community hosts.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub websites: Vec<Website>,
    pub servers: Vec<GameServerWithMods>,
}

impl Dashboard {
    /// Attaches every mod to the server it references.
    ///
    /// Websites and servers keep the order they were passed in. Each server receives the
    /// subsequence of `mods` whose `server_id` matches its id, in the order given. Mods
    /// referencing a server that is not in `servers` are dropped.
    ///
    /// # Arguments
    /// - `websites` - Websites, newest first
    /// - `servers` - Game servers, newest first
    /// - `mods` - Every mod in fetch order
    ///
    /// # Returns
    /// - `Dashboard` - The assembled aggregate
    pub fn assemble(websites: Vec<Website>, servers: Vec<GameServer>, mods: Vec<GameMod>) -> Self {
        let mut mods_by_server: HashMap<i32, Vec<GameMod>> = HashMap::new();
        for game_mod in mods {
            mods_by_server
                .entry(game_mod.server_id)
                .or_default()
                .push(game_mod);
        }

        let servers = servers
            .into_iter()
            .map(|server| GameServerWithMods {
                mods: mods_by_server.remove(&server.id).unwrap_or_default(),
                server,
            })
            .collect();

        Self { websites, servers }
    }

    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            websites: self.websites.into_iter().map(Website::into_dto).collect(),
            servers: self
                .servers
                .into_iter()
                .map(GameServerWithMods::into_dto)
                .collect(),
        }
    }
}
