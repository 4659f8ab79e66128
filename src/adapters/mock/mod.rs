//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`RecordingNotifier`] - Notifier that keeps every notice

pub mod http;
pub mod notifier;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use notifier::RecordingNotifier;
