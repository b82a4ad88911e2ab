use axum::{http::Request, middleware::Next, response::Response, extract::State, body::Body};
use std::sync::Arc;
use tracing::warn;
use crate::util::error::{HandlerError, HandlerErrorKind};

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

pub struct AdminAuthState {
    /// `None` leaves admin routes open.
    pub api_key: Option<String>,
}

pub async fn admin_auth(
    State(state): State<Arc<AdminAuthState>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, HandlerError> {
    let Some(expected) = state.api_key.as_deref() else {
        return Ok(next.run(req).await);
    };

    let provided = req.headers().get(ADMIN_KEY_HEADER).and_then(|v| v.to_str().ok());
    let rejection = match provided {
        None => Some((HandlerErrorKind::Unauthorized, "Missing admin key")),
        Some(key) if key != expected => Some((HandlerErrorKind::Forbidden, "Invalid admin key")),
        Some(_) => None,
    };
    if let Some((kind, message)) = rejection {
        warn!(path = %req.uri().path(), "{}", message);
        return Err(HandlerError::new(kind, message));
    }
    Ok(next.run(req).await)
}
