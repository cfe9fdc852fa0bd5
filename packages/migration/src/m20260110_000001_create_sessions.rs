use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Sessions {
    Table,
    Id,
    Multiplayer,
    ChooseCrew,
    DeploymentId,
    StrategyId,
    SchemePool,
    Round,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum SessionPlayers {
    Table,
    Id,
    SessionId,
    Seat,
    Email,
    Step,
    ChooseStep,
    Faction,
    Leader,
    CrewList,
    Schemes,
    StrategyScore,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // sessions
        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sessions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sessions::Multiplayer).boolean().not_null())
                    .col(ColumnDef::new(Sessions::ChooseCrew).boolean().not_null())
                    .col(
                        ColumnDef::new(Sessions::DeploymentId)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sessions::StrategyId)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Sessions::SchemePool).json_binary().not_null())
                    .col(
                        ColumnDef::new(Sessions::Round)
                            .small_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Sessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sessions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // session_players
        manager
            .create_table(
                Table::create()
                    .table(SessionPlayers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SessionPlayers::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(SessionPlayers::SessionId).string().not_null())
                    .col(ColumnDef::new(SessionPlayers::Seat).string().not_null())
                    .col(ColumnDef::new(SessionPlayers::Email).string().not_null())
                    .col(ColumnDef::new(SessionPlayers::Step).string().not_null())
                    .col(ColumnDef::new(SessionPlayers::ChooseStep).string().null())
                    .col(ColumnDef::new(SessionPlayers::Faction).string().null())
                    .col(ColumnDef::new(SessionPlayers::Leader).string().null())
                    .col(ColumnDef::new(SessionPlayers::CrewList).string().null())
                    .col(ColumnDef::new(SessionPlayers::Schemes).json_binary().null())
                    .col(
                        ColumnDef::new(SessionPlayers::StrategyScore)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SessionPlayers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SessionPlayers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_players_session_id")
                            .from(SessionPlayers::Table, SessionPlayers::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per seat: this unique index is the atomic guard that
        // decides a racing second join.
        manager
            .create_index(
                Index::create()
                    .name("ux_session_players_session_seat")
                    .table(SessionPlayers::Table)
                    .col(SessionPlayers::SessionId)
                    .col(SessionPlayers::Seat)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_session_players_session_id")
                    .table(SessionPlayers::Table)
                    .col(SessionPlayers::SessionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SessionPlayers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await?;
        Ok(())
    }
}
