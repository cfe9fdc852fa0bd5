//! Session HTTP routes: thin adapters from requests to the services.
//!
//! Handlers never inspect or filter game state themselves; every body
//! they return comes out of the view projector.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::player_view::project;
use crate::domain::role::Seat;
use crate::domain::state::{GameSession, SessionOptions};
use crate::error::AppError;
use crate::extractors::current_player::CurrentPlayer;
use crate::services::encounter_flow::EncounterFlowService;
use crate::services::sessions::SessionService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct CreateSessionRequest {
    encounter_code: String,
    #[serde(default)]
    multiplayer: bool,
    #[serde(default)]
    choose_crew: bool,
}

#[derive(Debug, Serialize)]
struct CreateSessionResponse {
    session_id: String,
}

#[derive(Debug, Deserialize)]
struct ChooseValueRequest {
    value: String,
}

#[derive(Debug, Deserialize)]
struct ChooseSchemesRequest {
    scheme_ids: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct AdvanceRoundRequest {
    round: u8,
}

#[derive(Debug, Deserialize)]
struct ScoreRequest {
    score: i32,
}

fn view_response(seat: Seat, session: &GameSession) -> HttpResponse {
    HttpResponse::Ok().json(project(seat, session))
}

async fn create_session(
    body: web::Json<CreateSessionRequest>,
    player: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let session = SessionService::new()
        .create(
            app_state.store.as_ref(),
            &body.encounter_code,
            SessionOptions {
                multiplayer: body.multiplayer,
                choose_crew: body.choose_crew,
            },
            &player.email,
        )
        .await?;
    Ok(HttpResponse::Created().json(CreateSessionResponse {
        session_id: session.id,
    }))
}

async fn join_session(
    path: web::Path<String>,
    player: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = SessionService::new()
        .join(
            app_state.store.as_ref(),
            app_state.hub.as_ref(),
            &path.into_inner(),
            &player.email,
        )
        .await?;
    Ok(view_response(Seat::Opponent, &session))
}

async fn get_view(
    path: web::Path<String>,
    player: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = EncounterFlowService::new()
        .view(app_state.store.as_ref(), &path.into_inner(), &player.email)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

async fn choose_faction(
    path: web::Path<String>,
    body: web::Json<ChooseValueRequest>,
    player: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (seat, session) = EncounterFlowService::new()
        .choose_faction(
            app_state.store.as_ref(),
            app_state.hub.as_ref(),
            &path.into_inner(),
            &player.email,
            body.into_inner().value,
        )
        .await?;
    Ok(view_response(seat, &session))
}

async fn choose_leader(
    path: web::Path<String>,
    body: web::Json<ChooseValueRequest>,
    player: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (seat, session) = EncounterFlowService::new()
        .choose_leader(
            app_state.store.as_ref(),
            app_state.hub.as_ref(),
            &path.into_inner(),
            &player.email,
            body.into_inner().value,
        )
        .await?;
    Ok(view_response(seat, &session))
}

async fn choose_crew_list(
    path: web::Path<String>,
    body: web::Json<ChooseValueRequest>,
    player: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (seat, session) = EncounterFlowService::new()
        .choose_crew_list(
            app_state.store.as_ref(),
            app_state.hub.as_ref(),
            &path.into_inner(),
            &player.email,
            body.into_inner().value,
        )
        .await?;
    Ok(view_response(seat, &session))
}

async fn choose_schemes(
    path: web::Path<String>,
    body: web::Json<ChooseSchemesRequest>,
    player: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (seat, session) = EncounterFlowService::new()
        .choose_schemes(
            app_state.store.as_ref(),
            app_state.hub.as_ref(),
            &path.into_inner(),
            &player.email,
            &body.into_inner().scheme_ids,
        )
        .await?;
    Ok(view_response(seat, &session))
}

async fn advance_round(
    path: web::Path<String>,
    body: web::Json<AdvanceRoundRequest>,
    player: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (seat, session) = EncounterFlowService::new()
        .advance_round(
            app_state.store.as_ref(),
            app_state.hub.as_ref(),
            &path.into_inner(),
            &player.email,
            body.into_inner().round,
        )
        .await?;
    Ok(view_response(seat, &session))
}

async fn set_strategy_score(
    path: web::Path<String>,
    body: web::Json<ScoreRequest>,
    player: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (seat, session) = EncounterFlowService::new()
        .set_strategy_score(
            app_state.store.as_ref(),
            app_state.hub.as_ref(),
            &path.into_inner(),
            &player.email,
            body.into_inner().score,
        )
        .await?;
    Ok(view_response(seat, &session))
}

async fn reveal_scheme(
    path: web::Path<(String, u8)>,
    player: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (session_id, scheme_id) = path.into_inner();
    let (seat, session) = EncounterFlowService::new()
        .reveal_scheme(
            app_state.store.as_ref(),
            app_state.hub.as_ref(),
            &session_id,
            &player.email,
            scheme_id,
        )
        .await?;
    Ok(view_response(seat, &session))
}

async fn score_scheme(
    path: web::Path<(String, u8)>,
    body: web::Json<ScoreRequest>,
    player: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (session_id, scheme_id) = path.into_inner();
    let (seat, session) = EncounterFlowService::new()
        .score_scheme(
            app_state.store.as_ref(),
            app_state.hub.as_ref(),
            &session_id,
            &player.email,
            scheme_id,
            body.into_inner().score,
        )
        .await?;
    Ok(view_response(seat, &session))
}

async fn finish(
    path: web::Path<String>,
    player: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (seat, session) = EncounterFlowService::new()
        .end_game(
            app_state.store.as_ref(),
            app_state.hub.as_ref(),
            &path.into_inner(),
            &player.email,
        )
        .await?;
    Ok(view_response(seat, &session))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_session)));
    cfg.service(web::resource("/{session_id}").route(web::get().to(get_view)));
    cfg.service(web::resource("/{session_id}/join").route(web::post().to(join_session)));
    cfg.service(web::resource("/{session_id}/crew/faction").route(web::post().to(choose_faction)));
    cfg.service(web::resource("/{session_id}/crew/leader").route(web::post().to(choose_leader)));
    cfg.service(web::resource("/{session_id}/crew/list").route(web::post().to(choose_crew_list)));
    cfg.service(web::resource("/{session_id}/schemes").route(web::post().to(choose_schemes)));
    cfg.service(web::resource("/{session_id}/round").route(web::post().to(advance_round)));
    cfg.service(
        web::resource("/{session_id}/strategy-score").route(web::post().to(set_strategy_score)),
    );
    cfg.service(
        web::resource("/{session_id}/schemes/{scheme_id}/reveal")
            .route(web::post().to(reveal_scheme)),
    );
    cfg.service(
        web::resource("/{session_id}/schemes/{scheme_id}/score").route(web::post().to(score_scheme)),
    );
    cfg.service(web::resource("/{session_id}/finish").route(web::post().to(finish)));
}
