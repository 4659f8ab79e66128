//! Session token persistence.
//!
//! The login flow itself happens elsewhere (the web client); this module
//! only stores the token it produced so the TUI can reuse it.

pub mod token_store;

pub use token_store::{StoredToken, TokenStore, ENV_TOKEN};
