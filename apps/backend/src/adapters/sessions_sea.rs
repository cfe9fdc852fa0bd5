//! SeaORM adapter for the session store.
//!
//! Every [`SessionUpdate`] variant maps to exactly one statement whose
//! WHERE clause carries the variant's guard, so validate-then-write is
//! atomic with respect to the field being set: a concurrent first-write
//! loses by matching zero rows, and seat claiming loses on the unique
//! (session_id, seat) index.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    Set, SqlErr, TransactionTrait,
};
use time::OffsetDateTime;

use crate::domain::commands::SessionUpdate;
use crate::domain::role::Seat;
use crate::domain::state::{
    ChooseStep, EncounterStep, GameSession, PlayerState, ScenarioSetup, SchemeCard,
};
use crate::entities::{session_players, sessions};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::sessions::SessionStore;

/// SeaORM implementation of [`SessionStore`].
#[derive(Debug, Clone)]
pub struct SessionStoreSea {
    db: DatabaseConnection,
}

impl SessionStoreSea {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionStore for SessionStoreSea {
    async fn find(&self, id: &str) -> Result<Option<GameSession>, DomainError> {
        let Some(row) = sessions::Entity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let players = session_players::Entity::find()
            .filter(session_players::Column::SessionId.eq(id))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(assemble(row, players)?))
    }

    async fn insert(&self, session: &GameSession) -> Result<(), DomainError> {
        let now = OffsetDateTime::now_utc();

        let session_row = sessions::ActiveModel {
            id: Set(session.id.clone()),
            multiplayer: Set(session.multiplayer),
            choose_crew: Set(session.choose_crew),
            deployment_id: Set(i16::from(session.scenario.deployment_id)),
            strategy_id: Set(i16::from(session.scenario.strategy_id)),
            scheme_pool: Set(serde_json::json!(session.scenario.scheme_pool)),
            round: Set(i16::from(session.round)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let txn = self.db.begin().await.map_err(map_db_err)?;
        session_row.insert(&txn).await.map_err(map_db_err)?;
        player_row(&session.id, Seat::Creator, &session.creator, now)?
            .insert(&txn)
            .await
            .map_err(map_db_err)?;
        if let Some(opponent) = &session.opponent {
            player_row(&session.id, Seat::Opponent, opponent, now)?
                .insert(&txn)
                .await
                .map_err(map_db_err)?;
        }
        txn.commit().await.map_err(map_db_err)?;
        Ok(())
    }

    async fn apply(&self, id: &str, update: &SessionUpdate) -> Result<bool, DomainError> {
        let now = OffsetDateTime::now_utc();

        match update {
            SessionUpdate::SeatOpponent { player } => {
                let row = player_row(id, Seat::Opponent, player, now)?;
                match row.insert(&self.db).await {
                    Ok(_) => Ok(true),
                    Err(err) => match err.sql_err() {
                        Some(SqlErr::UniqueConstraintViolation(_)) => Ok(false),
                        _ => Err(map_db_err(err)),
                    },
                }
            }

            SessionUpdate::SetFaction { seat, value } => {
                let res = player_update(id, *seat, now)
                    .col_expr(session_players::Column::Faction, Expr::value(value.clone()))
                    .col_expr(
                        session_players::Column::ChooseStep,
                        Expr::value(session_players::ChooseStepKind::Leader),
                    )
                    .filter(session_players::Column::Faction.is_null())
                    .exec(&self.db)
                    .await
                    .map_err(map_db_err)?;
                Ok(res.rows_affected > 0)
            }

            SessionUpdate::SetLeader { seat, value } => {
                let res = player_update(id, *seat, now)
                    .col_expr(session_players::Column::Leader, Expr::value(value.clone()))
                    .col_expr(
                        session_players::Column::ChooseStep,
                        Expr::value(session_players::ChooseStepKind::Crew),
                    )
                    .filter(session_players::Column::Leader.is_null())
                    .exec(&self.db)
                    .await
                    .map_err(map_db_err)?;
                Ok(res.rows_affected > 0)
            }

            SessionUpdate::SetCrewList { seat, value } => {
                let res = player_update(id, *seat, now)
                    .col_expr(session_players::Column::CrewList, Expr::value(value.clone()))
                    .col_expr(
                        session_players::Column::ChooseStep,
                        Expr::value(session_players::ChooseStepKind::Schemes),
                    )
                    .filter(session_players::Column::CrewList.is_null())
                    .exec(&self.db)
                    .await
                    .map_err(map_db_err)?;
                Ok(res.rows_affected > 0)
            }

            SessionUpdate::SetSchemes { seat, schemes } => {
                let res = player_update(id, *seat, now)
                    .col_expr(
                        session_players::Column::Schemes,
                        Expr::value(schemes_json(schemes)?),
                    )
                    .col_expr(
                        session_players::Column::Step,
                        Expr::value(session_players::StepKind::Score),
                    )
                    .col_expr(
                        session_players::Column::ChooseStep,
                        Expr::value(Option::<session_players::ChooseStepKind>::None),
                    )
                    .filter(session_players::Column::Schemes.is_null())
                    .exec(&self.db)
                    .await
                    .map_err(map_db_err)?;
                Ok(res.rows_affected > 0)
            }

            SessionUpdate::AdvanceRound { from, to } => {
                let res = sessions::Entity::update_many()
                    .col_expr(sessions::Column::Round, Expr::value(i16::from(*to)))
                    .col_expr(sessions::Column::UpdatedAt, Expr::value(now))
                    .filter(sessions::Column::Id.eq(id))
                    .filter(sessions::Column::Round.eq(i16::from(*from)))
                    .exec(&self.db)
                    .await
                    .map_err(map_db_err)?;
                Ok(res.rows_affected > 0)
            }

            SessionUpdate::SetStrategyScore { seat, score } => {
                let res = player_update(id, *seat, now)
                    .col_expr(session_players::Column::StrategyScore, Expr::value(*score))
                    .exec(&self.db)
                    .await
                    .map_err(map_db_err)?;
                Ok(res.rows_affected > 0)
            }

            SessionUpdate::ReplaceSchemes { seat, schemes } => {
                let res = player_update(id, *seat, now)
                    .col_expr(
                        session_players::Column::Schemes,
                        Expr::value(schemes_json(schemes)?),
                    )
                    .exec(&self.db)
                    .await
                    .map_err(map_db_err)?;
                Ok(res.rows_affected > 0)
            }

            SessionUpdate::FinishPlayer { seat } => {
                let res = player_update(id, *seat, now)
                    .col_expr(
                        session_players::Column::Step,
                        Expr::value(session_players::StepKind::FinishedGame),
                    )
                    .col_expr(
                        session_players::Column::ChooseStep,
                        Expr::value(Option::<session_players::ChooseStepKind>::None),
                    )
                    .exec(&self.db)
                    .await
                    .map_err(map_db_err)?;
                Ok(res.rows_affected > 0)
            }
        }
    }
}

/// Base UPDATE scoped to one player row, with the timestamp bump every
/// mutation carries.
fn player_update(
    session_id: &str,
    seat: Seat,
    now: OffsetDateTime,
) -> sea_orm::UpdateMany<session_players::Entity> {
    session_players::Entity::update_many()
        .col_expr(session_players::Column::UpdatedAt, Expr::value(now))
        .filter(session_players::Column::SessionId.eq(session_id))
        .filter(session_players::Column::Seat.eq(seat_to_db(seat)))
}

fn player_row(
    session_id: &str,
    seat: Seat,
    player: &PlayerState,
    now: OffsetDateTime,
) -> Result<session_players::ActiveModel, DomainError> {
    let schemes = match &player.schemes {
        Some(schemes) => Some(schemes_json(schemes)?),
        None => None,
    };
    Ok(session_players::ActiveModel {
        id: NotSet,
        session_id: Set(session_id.to_owned()),
        seat: Set(seat_to_db(seat)),
        email: Set(player.email.clone()),
        step: Set(step_to_db(player.step)),
        choose_step: Set(player.choose_step.map(choose_step_to_db)),
        faction: Set(player.crew.faction.clone()),
        leader: Set(player.crew.leader.clone()),
        crew_list: Set(player.crew.list.clone()),
        schemes: Set(schemes),
        strategy_score: Set(player.strategy_score),
        created_at: Set(now),
        updated_at: Set(now),
    })
}

fn assemble(
    row: sessions::Model,
    players: Vec<session_players::Model>,
) -> Result<GameSession, DomainError> {
    let mut creator = None;
    let mut opponent = None;
    for player in players {
        match player.seat {
            session_players::SeatKind::Creator => creator = Some(player_from_row(player)?),
            session_players::SeatKind::Opponent => opponent = Some(player_from_row(player)?),
        }
    }
    let creator = creator.ok_or_else(|| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("session {} has no creator row", row.id),
        )
    })?;

    let scheme_pool: [u8; 5] = serde_json::from_value(row.scheme_pool).map_err(|err| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("session {} has a malformed scheme pool: {err}", row.id),
        )
    })?;

    Ok(GameSession {
        id: row.id,
        scenario: ScenarioSetup {
            deployment_id: row.deployment_id as u8,
            strategy_id: row.strategy_id as u8,
            scheme_pool,
        },
        round: row.round as u8,
        multiplayer: row.multiplayer,
        choose_crew: row.choose_crew,
        creator,
        opponent,
    })
}

fn player_from_row(row: session_players::Model) -> Result<PlayerState, DomainError> {
    let schemes = match row.schemes {
        Some(json) => Some(serde_json::from_value::<Vec<SchemeCard>>(json).map_err(|err| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("player row {} has malformed schemes: {err}", row.id),
            )
        })?),
        None => None,
    };
    Ok(PlayerState {
        email: row.email,
        step: step_from_db(row.step),
        choose_step: row.choose_step.map(choose_step_from_db),
        crew: crate::domain::state::CrewChoice {
            faction: row.faction,
            leader: row.leader,
            list: row.crew_list,
        },
        schemes,
        strategy_score: row.strategy_score,
    })
}

fn schemes_json(schemes: &[SchemeCard]) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(schemes).map_err(|err| {
        DomainError::infra(
            InfraErrorKind::Other("serialize".into()),
            format!("failed to serialize schemes: {err}"),
        )
    })
}

fn seat_to_db(seat: Seat) -> session_players::SeatKind {
    match seat {
        Seat::Creator => session_players::SeatKind::Creator,
        Seat::Opponent => session_players::SeatKind::Opponent,
    }
}

fn step_to_db(step: EncounterStep) -> session_players::StepKind {
    match step {
        EncounterStep::ManualChoice => session_players::StepKind::ManualChoice,
        EncounterStep::Generate => session_players::StepKind::Generate,
        EncounterStep::Choose => session_players::StepKind::Choose,
        EncounterStep::Score => session_players::StepKind::Score,
        EncounterStep::FinishedGame => session_players::StepKind::FinishedGame,
    }
}

fn step_from_db(step: session_players::StepKind) -> EncounterStep {
    match step {
        session_players::StepKind::ManualChoice => EncounterStep::ManualChoice,
        session_players::StepKind::Generate => EncounterStep::Generate,
        session_players::StepKind::Choose => EncounterStep::Choose,
        session_players::StepKind::Score => EncounterStep::Score,
        session_players::StepKind::FinishedGame => EncounterStep::FinishedGame,
    }
}

fn choose_step_to_db(step: ChooseStep) -> session_players::ChooseStepKind {
    match step {
        ChooseStep::Faction => session_players::ChooseStepKind::Faction,
        ChooseStep::Leader => session_players::ChooseStepKind::Leader,
        ChooseStep::Crew => session_players::ChooseStepKind::Crew,
        ChooseStep::Schemes => session_players::ChooseStepKind::Schemes,
    }
}

fn choose_step_from_db(step: session_players::ChooseStepKind) -> ChooseStep {
    match step {
        session_players::ChooseStepKind::Faction => ChooseStep::Faction,
        session_players::ChooseStepKind::Leader => ChooseStep::Leader,
        session_players::ChooseStepKind::Crew => ChooseStep::Crew,
        session_players::ChooseStepKind::Schemes => ChooseStep::Schemes,
    }
}

fn map_db_err(err: DbErr) -> DomainError {
    match &err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            DomainError::infra(InfraErrorKind::DbUnavailable, err.to_string())
        }
        _ => DomainError::infra(InfraErrorKind::Other("db".into()), err.to_string()),
    }
}
