use actix_web::web;

pub mod health;
pub mod sessions;

/// Configure application routes. `main.rs` mounts this under `/api`;
/// the websocket upgrade lives outside the scope (see `ws::session`).
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health));
    cfg.service(web::scope("/sessions").configure(sessions::configure_routes));
}
