use gloo_net::http::Request;

use crate::error::AppError;
use crate::models::{
    ConversationPayload, ConversationSummary, Message, SendMessageRequest, SendMessageResponse,
};
use crate::services::{bearer, response_error};
use crate::utils::BACKEND_URL;

/// Conversation summaries for the authenticated user, in backend order.
pub async fn fetch_history(token: &str) -> Result<Vec<ConversationSummary>, AppError> {
    let url = format!("{}/chat/history", BACKEND_URL);

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| AppError::Network(format!("Request error: {}", e)))?;

    if !response.ok() {
        return Err(response_error(&response).await);
    }

    response
        .json::<Vec<ConversationSummary>>()
        .await
        .map_err(|e| AppError::Network(format!("Parse error: {}", e)))
}

/// Full message list for one conversation.
pub async fn load_chat(token: &str, chat_id: &str) -> Result<Vec<Message>, AppError> {
    let url = format!("{}/chat/{}", BACKEND_URL, chat_id);

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| AppError::Network(format!("Request error: {}", e)))?;

    if !response.ok() {
        return Err(response_error(&response).await);
    }

    response
        .json::<ConversationPayload>()
        .await
        .map(|payload| payload.messages)
        .map_err(|e| AppError::Network(format!("Parse error: {}", e)))
}

/// Send one user message. `chat_id` is `None` for a fresh conversation;
/// the backend then allocates an id and returns it in the response.
pub async fn send_message(
    token: &str,
    message: &str,
    chat_id: Option<&str>,
) -> Result<SendMessageResponse, AppError> {
    let url = format!("{}/chat/", BACKEND_URL);
    let body = SendMessageRequest {
        message: message.to_string(),
        chat_id: chat_id.map(str::to_string),
    };

    let response = Request::post(&url)
        .header("Authorization", &bearer(token))
        .json(&body)
        .map_err(|e| AppError::Network(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(format!("Request error: {}", e)))?;

    if !response.ok() {
        return Err(response_error(&response).await);
    }

    response
        .json::<SendMessageResponse>()
        .await
        .map_err(|e| AppError::Network(format!("Parse error: {}", e)))
}

pub async fn delete_chat(token: &str, chat_id: &str) -> Result<(), AppError> {
    let url = format!("{}/chat/{}", BACKEND_URL, chat_id);

    let response = Request::delete(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| AppError::Network(format!("Request error: {}", e)))?;

    if !response.ok() {
        return Err(response_error(&response).await);
    }

    Ok(())
}
