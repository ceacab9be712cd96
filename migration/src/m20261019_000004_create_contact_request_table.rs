use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ContactRequest::Id))
                    .col(string(ContactRequest::Name))
                    .col(string(ContactRequest::Email))
                    .col(string_len(ContactRequest::RequestType, 32))
                    .col(text(ContactRequest::Message))
                    .col(
                        timestamp_with_time_zone(ContactRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContactRequest {
    #[sea_orm(iden = "contact_requests")]
    Table,
    Id,
    Name,
    Email,
    RequestType,
    Message,
    CreatedAt,
}
