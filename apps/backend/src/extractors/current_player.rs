//! Authenticated caller extractor.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};

use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// The verified identity behind a request.
///
/// The domain only ever compares `email` for equality; it carries no
/// further meaning here.
#[derive(Debug, Clone)]
pub struct CurrentPlayer {
    pub sub: String,
    pub email: String,
}

fn resolve(req: &HttpRequest) -> Result<CurrentPlayer, AppError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(AppError::unauthorized_missing_bearer)?;

    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or_else(AppError::unauthorized_missing_bearer)?;

    let app_state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    let claims = verify_access_token(token, &app_state.security)?;
    Ok(CurrentPlayer {
        sub: claims.sub,
        email: claims.email,
    })
}

impl FromRequest for CurrentPlayer {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(resolve(req))
    }
}
