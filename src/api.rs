//! Backend API client.
//!
//! Wraps an [`HttpClient`] with the routes the chat client talks to:
//!
//! - `POST /api/message/text` and `POST /api/message/image` to submit a prompt
//! - `GET /api/user/data` and `GET /api/chat/get` to bootstrap the session
//!
//! Every request carries the session token verbatim in `Authorization`.

use std::sync::Arc;

use crate::error::{ChatError, ChatResult};
use crate::models::{
    Chat, ChatListResponse, ChatMode, Message, SubmissionRequest, SubmitResponse, User,
    UserDataResponse,
};
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Default backend location for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Client for the chat backend.
#[derive(Clone)]
pub struct MessageApi {
    /// Base URL without a trailing slash
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl MessageApi {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the message route for `mode`.
    pub fn message_url(&self, mode: ChatMode) -> String {
        format!("{}/api/message/{}", self.base_url, mode.as_str())
    }

    fn auth_headers(token: &str) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), token.to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    /// Reject non-2xx answers the way the transport would.
    fn check_status(response: Response) -> ChatResult<Response> {
        if response.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(HttpError::ServerError {
            status: response.status,
            message,
        }
        .into())
    }

    /// Submit a prompt and return the assistant's reply.
    ///
    /// Issues exactly one request. A `success: false` envelope becomes
    /// [`ChatError::Logical`]; anything that keeps the envelope from being
    /// read becomes [`ChatError::Transport`] or [`ChatError::Decode`].
    pub async fn send(&self, request: &SubmissionRequest, token: &str) -> ChatResult<Message> {
        let url = self.message_url(request.mode);
        let body = serde_json::to_string(request)?;

        tracing::debug!(url = %url, chat_id = %request.chat_id, "Sending message");

        let response = self
            .http
            .post(&url, &body, &Self::auth_headers(token))
            .await?;
        let envelope: SubmitResponse = Self::check_status(response)?.json()?;

        if !envelope.success {
            return Err(ChatError::logical(envelope.message));
        }
        envelope
            .reply
            .ok_or_else(|| ChatError::decode("success response without a reply"))
    }

    /// Fetch the signed-in user's record.
    pub async fn fetch_user(&self, token: &str) -> ChatResult<User> {
        let url = format!("{}/api/user/data", self.base_url);
        let response = self.http.get(&url, &Self::auth_headers(token)).await?;
        let envelope: UserDataResponse = Self::check_status(response)?.json()?;

        if !envelope.success {
            return Err(ChatError::logical(envelope.message));
        }
        envelope
            .user
            .ok_or_else(|| ChatError::decode("success response without a user"))
    }

    /// Fetch the signed-in user's conversations.
    pub async fn fetch_chats(&self, token: &str) -> ChatResult<Vec<Chat>> {
        let url = format!("{}/api/chat/get", self.base_url);
        let response = self.http.get(&url, &Self::auth_headers(token)).await?;
        let envelope: ChatListResponse = Self::check_status(response)?.json()?;

        if !envelope.success {
            return Err(ChatError::logical(envelope.message));
        }
        Ok(envelope.chats)
    }
}

impl std::fmt::Debug for MessageApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
