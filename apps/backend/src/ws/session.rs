use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::warn;
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::current_player::CurrentPlayer;
use crate::state::app_state::AppState;
use crate::ws::hub::{SessionHub, StateChanged};
use crate::ws::protocol::ServerMsg;

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

/// Upgrade an authenticated request into a session subscription.
///
/// Subscribers may be passive observers; the pushed events carry no
/// secret state, so participation is not required — only a valid token
/// and an existing session.
pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    path: web::Path<String>,
    player: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let session_id = path.into_inner();

    let exists = app_state
        .store
        .find(&session_id)
        .await
        .map_err(AppError::from)?
        .is_some();
    if !exists {
        return Err(AppError::not_found(
            ErrorCode::SessionNotFound,
            format!("no session {session_id}"),
        )
        .into());
    }

    tracing::debug!(session_id = %session_id, email = %player.email, "subscriber connecting");
    let actor = WsSession::new(session_id, app_state.hub.clone());
    ws::start(actor, &req, stream)
}

/// One connected subscriber of one session.
pub struct WsSession {
    session_id: String,
    hub: Arc<SessionHub>,
    token: Option<Uuid>,
    last_heartbeat: Instant,
}

impl WsSession {
    fn new(session_id: String, hub: Arc<SessionHub>) -> Self {
        Self {
            session_id,
            hub,
            token: None,
            last_heartbeat: Instant::now(),
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "failed to serialize outbound message"),
        }
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(session_id = %actor.session_id, "heartbeat timed out");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.token = Some(
            self.hub
                .register(&self.session_id, ctx.address().recipient()),
        );
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(token) = self.token.take() {
            self.hub.unregister(&self.session_id, token);
        }
    }
}

impl Handler<StateChanged> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: StateChanged, ctx: &mut Self::Context) {
        Self::send_json(
            ctx,
            &ServerMsg::StateChanged {
                session_id: self.session_id.clone(),
                acted: msg.acted,
            },
        );
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            // Subscribers are listen-only; inbound text/binary is ignored.
            Ok(_) => {}
            Err(err) => {
                warn!(session_id = %self.session_id, error = %err, "websocket protocol error");
                ctx.stop();
            }
        }
    }
}
