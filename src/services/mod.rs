pub mod auth_service;
pub mod chat_service;

pub use auth_service::*;
pub use chat_service::*;

use gloo_net::http::Response;

use crate::error::AppError;
use crate::models::ErrorBody;

pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Maps a non-2xx response to an error, preferring the message the
/// backend put in the body over a bare status code. 401 means the
/// credential is bad, whatever the body says.
pub(crate) async fn response_error(response: &Response) -> AppError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("HTTP error: {}", status));

    if status == 401 {
        AppError::Auth(message)
    } else {
        AppError::Http { status, message }
    }
}
