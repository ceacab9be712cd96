use sea_orm_migration::{prelude::*, schema::*};

use super::m20261019_000002_create_game_server_table::GameServer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mod::Table)
                    .if_not_exists()
                    .col(pk_auto(Mod::Id))
                    .col(integer(Mod::ServerId))
                    .col(string(Mod::Name))
                    .col(string(Mod::Url))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mods_server_id")
                            .from(Mod::Table, Mod::ServerId)
                            .to(GameServer::Table, GameServer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mods_server_id")
                    .table(Mod::Table)
                    .col(Mod::ServerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mod::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mod {
    #[sea_orm(iden = "mods")]
    Table,
    Id,
    ServerId,
    Name,
    Url,
}
