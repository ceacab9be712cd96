use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameServer::Table)
                    .if_not_exists()
                    .col(pk_auto(GameServer::Id))
                    .col(string(GameServer::Name))
                    .col(string(GameServer::Game))
                    .col(text_null(GameServer::Description))
                    .col(string_len(GameServer::Status, 16).default("offline"))
                    .col(
                        timestamp_with_time_zone(GameServer::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameServer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameServer {
    #[sea_orm(iden = "game_servers")]
    Table,
    Id,
    Name,
    Game,
    Description,
    Status,
    CreatedAt,
}
