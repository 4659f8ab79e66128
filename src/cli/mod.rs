//! CLI module for quickchat.
//!
//! Handles the flags that run and exit before the TUI starts:
//!
//! ```ignore
//! use quickchat::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command, &store) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;

pub use args::{parse_args, CliCommand, USAGE};

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::auth::{StoredToken, TokenStore};

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub fn run_cli_command(command: CliCommand, store: Option<&TokenStore>) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("quickchat {}", VERSION);
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Login(token) => Some(handle_login(store, &token)),
        CliCommand::Logout => Some(handle_logout(store)),
        CliCommand::Invalid(message) => Some(Err(eyre!("{}\n\n{}", message, USAGE))),
        CliCommand::RunTui => None,
    }
}

fn handle_login(store: Option<&TokenStore>, token: &str) -> Result<()> {
    let store = store.ok_or_else(|| eyre!("cannot determine home directory"))?;
    if !store.save(&StoredToken::new(token.trim())) {
        return Err(eyre!(
            "failed to write {}",
            store.credentials_path().display()
        ));
    }
    tracing::info!("Session token saved");
    println!("Token saved to {}", store.credentials_path().display());
    Ok(())
}

fn handle_logout(store: Option<&TokenStore>) -> Result<()> {
    let store = store.ok_or_else(|| eyre!("cannot determine home directory"))?;
    if !store.clear() {
        return Err(eyre!(
            "failed to remove {}",
            store.credentials_path().display()
        ));
    }
    tracing::info!("Session token removed");
    println!("Logged out");
    Ok(())
}
