pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_website_table;
mod m20261019_000002_create_game_server_table;
mod m20261019_000003_create_mod_table;
mod m20261019_000004_create_contact_request_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_website_table::Migration),
            Box::new(m20261019_000002_create_game_server_table::Migration),
            Box::new(m20261019_000003_create_mod_table::Migration),
            Box::new(m20261019_000004_create_contact_request_table::Migration),
        ]
    }
}
