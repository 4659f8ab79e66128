//! Trait abstractions for the chat panel's collaborators.
//!
//! The panel never reaches for globals: its transport, its session and its
//! notification sink are injected through these traits so that tests can
//! substitute in-memory doubles.
//!
//! # Traits
//!
//! - [`HttpClient`] - Authenticated HTTP transport (GET, POST)
//! - [`SessionService`] - Signed-in user, auth token and selected conversation
//! - [`Notifier`] - Transient info/error notices

pub mod http;
pub mod notifier;
pub mod session;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use notifier::{Notice, NoticeLevel, Notifier};
pub use session::SessionService;
