use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub multiplayer: bool,
    #[sea_orm(column_name = "choose_crew")]
    pub choose_crew: bool,
    #[sea_orm(column_name = "deployment_id", column_type = "SmallInteger")]
    pub deployment_id: i16,
    #[sea_orm(column_name = "strategy_id", column_type = "SmallInteger")]
    pub strategy_id: i16,
    /// JSON array of the five pooled scheme ids, sorted ascending.
    #[sea_orm(column_name = "scheme_pool")]
    pub scheme_pool: Json,
    #[sea_orm(column_type = "SmallInteger")]
    pub round: i16,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::session_players::Entity")]
    SessionPlayers,
}

impl Related<super::session_players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionPlayers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
