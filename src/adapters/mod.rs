//! Concrete implementations of the trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP transport using reqwest
//! - [`InMemorySession`] - Session state behind mutexes plus a watch channel
//! - [`ToastQueue`] - Notices shown as expiring toasts in the TUI and logged
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses with request recording
//! - [`mock::RecordingNotifier`] - Collects every notice for assertions

pub mod in_memory_session;
pub mod mock;
pub mod notifier;
pub mod reqwest_http;

pub use in_memory_session::InMemorySession;
pub use mock::{MockHttpClient, RecordingNotifier};
pub use notifier::{Toast, ToastQueue};
pub use reqwest_http::ReqwestHttpClient;
