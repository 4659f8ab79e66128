//! quickchat - a terminal chat client for a text and image generation backend
//!
//! The library holds the chat panel logic and its adapters so the binary and
//! the integration tests share one implementation.

pub mod adapters;
pub mod api;
pub mod app;
pub mod auth;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
