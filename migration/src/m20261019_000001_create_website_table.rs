use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Website::Table)
                    .if_not_exists()
                    .col(pk_auto(Website::Id))
                    .col(string(Website::Name))
                    .col(string(Website::Url))
                    .col(text_null(Website::Description))
                    .col(
                        timestamp_with_time_zone(Website::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Website::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Website {
    #[sea_orm(iden = "websites")]
    Table,
    Id,
    Name,
    Url,
    Description,
    CreatedAt,
}
