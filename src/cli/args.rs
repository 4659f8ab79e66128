//! Command-line argument parsing for quickchat.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Store a session token for later runs
    Login(String),
    /// Forget the stored session token
    Logout,
    /// Arguments that could not be understood
    Invalid(String),
    /// Run the TUI application (default)
    RunTui,
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: quickchat [OPTIONS]

Options:
  --login <TOKEN>   Save a session token and exit
  --logout          Remove the saved session token and exit
  -V, --version     Print version
  -h, --help        Print this help

Environment:
  QUICKCHAT_API_URL       Backend base URL
  QUICKCHAT_TOKEN         Session token (overrides the saved one)
  QUICKCHAT_MODE          Initial mode: text or image
  QUICKCHAT_TIMEOUT_SECS  Request timeout in seconds
  QUICKCHAT_LOG           Log filter, e.g. debug or quickchat=trace";

/// Parse command-line arguments and return the appropriate command.
///
/// The first argument is the program name and is skipped.
///
/// # Examples
///
/// ```
/// use quickchat::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["quickchat".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--logout" => return CliCommand::Logout,
            "--login" => {
                return match args.next() {
                    Some(token) if !token.trim().is_empty() => CliCommand::Login(token),
                    _ => CliCommand::Invalid("--login requires a token".to_string()),
                };
            }
            other if other.starts_with("--login=") => {
                let token = &other["--login=".len()..];
                return if token.trim().is_empty() {
                    CliCommand::Invalid("--login requires a token".to_string())
                } else {
                    CliCommand::Login(token.to_string())
                };
            }
            other if other.starts_with('-') => {
                return CliCommand::Invalid(format!("unknown option '{}'", other));
            }
            _ => {}
        }
    }
    CliCommand::RunTui
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut full = vec!["quickchat".to_string()];
        full.extend(args.iter().map(|s| s.to_string()));
        parse_args(full.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::RunTui);
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_login() {
        assert_eq!(parse(&["--login", "jwt"]), CliCommand::Login("jwt".to_string()));
        assert_eq!(parse(&["--login=jwt2"]), CliCommand::Login("jwt2".to_string()));
        assert!(matches!(parse(&["--login"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--login="]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_logout() {
        assert_eq!(parse(&["--logout"]), CliCommand::Logout);
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--frobnicate"]),
            CliCommand::Invalid("unknown option '--frobnicate'".to_string())
        );
    }

    #[test]
    fn test_positional_args_are_ignored() {
        assert_eq!(parse(&["extra"]), CliCommand::RunTui);
    }
}
