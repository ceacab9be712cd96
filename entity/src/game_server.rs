use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "game_servers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub game: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Either `online` or `offline`.
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_mod::Entity")]
    GameMod,
}

impl Related<super::game_mod::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameMod.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
