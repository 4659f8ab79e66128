//! Data models shared between the backend API and the chat panel.

mod chat;
mod message;
mod request;
mod user;

pub use chat::Chat;
pub use message::{Message, MessageRole};
pub use request::{ChatListResponse, ChatMode, SubmissionRequest, SubmitResponse, UserDataResponse};
pub use user::User;
