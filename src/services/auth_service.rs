use gloo_net::http::Request;
use serde_json::Value;

use crate::error::AppError;
use crate::models::{LoginRequest, LoginResponse, ProfileUpdate, SignupRequest, User};
use crate::services::{bearer, response_error};
use crate::utils::BACKEND_URL;

/// Exchange credentials for a token + profile snapshot.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, AppError> {
    let url = format!("{}/auth/login", BACKEND_URL);
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| AppError::Network(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(format!("Request error: {}", e)))?;

    if !response.ok() {
        return Err(response_error(&response).await);
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| AppError::Network(format!("Parse error: {}", e)))
}

/// Register a new account. Returns the raw payload (typically a
/// "check your email" message); no session is established here.
pub async fn register(draft: &SignupRequest) -> Result<Value, AppError> {
    let url = format!("{}/auth/register", BACKEND_URL);

    let response = Request::post(&url)
        .json(draft)
        .map_err(|e| AppError::Network(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(format!("Request error: {}", e)))?;

    if !response.ok() {
        return Err(response_error(&response).await);
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| AppError::Network(format!("Parse error: {}", e)))
}

/// One-shot exchange of an email verification token.
pub async fn verify_email(token: &str) -> Result<Value, AppError> {
    let url = format!("{}/auth/verify-email/{}", BACKEND_URL, token);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(format!("Request error: {}", e)))?;

    if !response.ok() {
        return Err(response_error(&response).await);
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| AppError::Network(format!("Parse error: {}", e)))
}

/// Fetch the canonical profile for `token`. Doubles as token
/// verification: a failure here means the session is not valid.
pub async fn fetch_profile(token: &str) -> Result<User, AppError> {
    let url = format!("{}/auth/profile", BACKEND_URL);

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| AppError::Network(format!("Request error: {}", e)))?;

    if !response.ok() {
        return Err(response_error(&response).await);
    }

    response
        .json::<User>()
        .await
        .map_err(|e| AppError::Network(format!("Parse error: {}", e)))
}

/// Write the edited profile fields; returns the updated snapshot.
pub async fn update_profile(token: &str, draft: &ProfileUpdate) -> Result<User, AppError> {
    let url = format!("{}/auth/profile", BACKEND_URL);

    let response = Request::put(&url)
        .header("Authorization", &bearer(token))
        .json(draft)
        .map_err(|e| AppError::Network(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(format!("Request error: {}", e)))?;

    if !response.ok() {
        return Err(response_error(&response).await);
    }

    response
        .json::<User>()
        .await
        .map_err(|e| AppError::Network(format!("Parse error: {}", e)))
}
