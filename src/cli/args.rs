//! Command-line argument parsing for folio.

use crate::content::Route;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    Run(StartOptions),
}

/// What the TUI starts on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartOptions {
    pub route: Route,
    /// A route argument that could not be parsed and was replaced by `/`.
    pub rejected_route: Option<String>,
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first argument not starting with `-` is taken as the start route.
/// Unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = StartOptions::default();
    let mut route_seen = false;

    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            flag if flag.starts_with('-') => {}
            route if !route_seen => {
                route_seen = true;
                match route.parse::<Route>() {
                    Ok(route) => options.route = route,
                    Err(_) => options.rejected_route = Some(route.to_string()),
                }
            }
            _ => {}
        }
    }

    CliCommand::Run(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["folio".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["/blog", "-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::Run(StartOptions::default()));
    }

    #[test]
    fn test_parse_start_route() {
        let CliCommand::Run(options) = parse(&["/blog?tag=python"]) else {
            panic!("expected Run");
        };
        assert_eq!(
            options.route,
            Route::BlogIndex {
                tag: Some("python".to_string())
            }
        );
        assert!(options.rejected_route.is_none());
    }

    #[test]
    fn test_invalid_route_falls_back_home() {
        let CliCommand::Run(options) = parse(&["--unknown", "/nowhere"]) else {
            panic!("expected Run");
        };
        assert_eq!(options.route, Route::home());
        assert_eq!(options.rejected_route.as_deref(), Some("/nowhere"));
    }

    #[test]
    fn test_only_first_route_counts() {
        let CliCommand::Run(options) = parse(&["/#work", "/blog"]) else {
            panic!("expected Run");
        };
        assert_eq!(
            options.route,
            Route::Home {
                anchor: Some(crate::content::Anchor::Work)
            }
        );
    }
}
