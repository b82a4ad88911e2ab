pub mod quote_handler;
pub mod product_handler;
pub mod inquiry_handler;

use axum::{extract::rejection::JsonRejection, Json};
use crate::util::error::HandlerError;

/// Unwraps a JSON body, turning axum's rejection into a 400 with the parser message.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, HandlerError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::error!("Invalid JSON body: {}", rejection.body_text());
            Err(HandlerError::bad_request(format!("Invalid JSON: {}", rejection.body_text())))
        }
    }
}
