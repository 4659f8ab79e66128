//! Error types for the chat client.
//!
//! - [`ChatError`]: every failure of the submit flow and the session
//!   bootstrap, with the notice text the user sees.
//! - [`ErrorCategory`]: coarse classification used for logging.
//! - [`ConfigError`]: failures reading the configuration file.
//!
//! | Variant | Category | Notice |
//! |---------|----------|--------|
//! | `NotAuthenticated` | Auth | "Login to send message" |
//! | `NoConversationSelected` | User | yes |
//! | `EmptyPrompt`, `Busy` | User | silent |
//! | `Logical` | Server | backend message |
//! | `Transport` | Network / Server / Auth | error description |
//! | `Decode` | Client | error description |

mod category;
mod chat_error;

pub use category::ErrorCategory;
pub use chat_error::{ChatError, LOGIN_REQUIRED_NOTICE};
pub use crate::config::ConfigError;

/// Result alias for chat operations.
pub type ChatResult<T> = Result<T, ChatError>;
