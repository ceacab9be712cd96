//! Dashboard query service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        game_mod::GameModRepository, game_server::GameServerRepository,
        website::WebsiteRepository,
    },
    error::AppError,
    model::dashboard::Dashboard,
    service::cache::DashboardCache,
};

/// Service building the combined dashboard payload.
pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a DashboardCache,
}

impl<'a> DashboardService<'a> {
    /// Creates a new DashboardService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `cache` - Dashboard cache shared through the application state
    pub fn new(db: &'a DatabaseConnection, cache: &'a DashboardCache) -> Self {
        Self { db, cache }
    }

    /// Gets websites and game servers with their mods.
    ///
    /// Served from the cache while no mutation happened since it was loaded.
    ///
    /// # Returns
    /// - `Ok(Dashboard)` - Websites and servers newest first, each server with its mods
    /// - `Err(AppError)` - Any query failed; no partial result is returned
    pub async fn get_dashboard(&self) -> Result<Dashboard, AppError> {
        self.cache.get_or_load(|| self.load()).await
    }

    /// Loads the dashboard straight from the database.
    async fn load(&self) -> Result<Dashboard, AppError> {
        let websites = WebsiteRepository::new(self.db).get_all().await?;
        let servers = GameServerRepository::new(self.db).get_all().await?;
        let mods = GameModRepository::new(self.db).get_all().await?;

        tracing::debug!(
            "Loaded dashboard with {} websites, {} servers and {} mods",
            websites.len(),
            servers.len(),
            mods.len()
        );

        Ok(Dashboard::assemble(websites, servers, mods))
    }
}
