use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum SeatKind {
    #[sea_orm(string_value = "CREATOR")]
    Creator,
    #[sea_orm(string_value = "OPPONENT")]
    Opponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum StepKind {
    #[sea_orm(string_value = "MANUAL_CHOICE")]
    ManualChoice,
    #[sea_orm(string_value = "GENERATE")]
    Generate,
    #[sea_orm(string_value = "CHOOSE")]
    Choose,
    #[sea_orm(string_value = "SCORE")]
    Score,
    #[sea_orm(string_value = "FINISHED_GAME")]
    FinishedGame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ChooseStepKind {
    #[sea_orm(string_value = "FACTION")]
    Faction,
    #[sea_orm(string_value = "LEADER")]
    Leader,
    #[sea_orm(string_value = "CREW")]
    Crew,
    #[sea_orm(string_value = "SCHEMES")]
    Schemes,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "session_players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique together with `seat`: the index is the atomic guard that
    /// makes a racing second join lose instead of double-seating.
    #[sea_orm(column_name = "session_id")]
    pub session_id: String,
    pub seat: SeatKind,
    pub email: String,
    pub step: StepKind,
    #[sea_orm(column_name = "choose_step")]
    pub choose_step: Option<ChooseStepKind>,
    pub faction: Option<String>,
    pub leader: Option<String>,
    #[sea_orm(column_name = "crew_list")]
    pub crew_list: Option<String>,
    /// JSON array of the player's two schemes once chosen.
    pub schemes: Option<Json>,
    #[sea_orm(column_name = "strategy_score")]
    pub strategy_score: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sessions::Entity",
        from = "Column::SessionId",
        to = "super::sessions::Column::Id"
    )]
    Session,
}

impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
