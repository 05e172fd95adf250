use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use route_matcher::config::{self, MatcherConfig};
use route_matcher::observability::init_logging;
use route_matcher::routing::{HandlerType, PathMatcher, RouteEntry};

#[derive(Parser)]
#[command(name = "route-matcher")]
#[command(about = "Compile path templates and resolve request paths against them", long_about = None)]
struct Cli {
    /// Route table (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    /// Overrides the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and compile every route
    Check,
    /// List registered routes
    Routes,
    /// Resolve a request against the route table
    Match {
        /// HTTP method, e.g. GET
        method: HandlerType,
        /// Request path, e.g. /users/42
        path: String,
    },
}

#[derive(Serialize)]
struct RouteView<'a> {
    method: HandlerType,
    path: &'a str,
    params: &'a [String],
    handler: &'a str,
    roles: &'a BTreeSet<String>,
}

impl<'a> From<&'a RouteEntry<String>> for RouteView<'a> {
    fn from(entry: &'a RouteEntry<String>) -> Self {
        Self {
            method: entry.handler_type,
            path: entry.path(),
            params: entry.parser.path_param_names(),
            handler: &entry.handler,
            roles: &entry.roles,
        }
    }
}

#[derive(Serialize)]
struct Resolution<'a> {
    status: u16,
    before: Vec<&'a str>,
    endpoint: Option<&'a str>,
    params: BTreeMap<String, String>,
    after: Vec<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    allow: Vec<HandlerType>,
}

fn resolve<'a>(
    matcher: &'a PathMatcher<String>,
    method: HandlerType,
    path: &'a str,
) -> Resolution<'a> {
    let handlers = move |ty: HandlerType| -> Vec<&'a str> {
        matcher
            .find_entries(ty, path)
            .map(|e| e.handler.as_str())
            .collect()
    };

    let mut before = handlers(HandlerType::Before);
    let mut after = handlers(HandlerType::After);

    match matcher.find_entries(method, path).next() {
        Some(entry) => {
            before.extend(handlers(HandlerType::BeforeMatched));
            let mut matched_after = handlers(HandlerType::AfterMatched);
            matched_after.append(&mut after);
            Resolution {
                status: 200,
                before,
                endpoint: Some(entry.handler.as_str()),
                params: entry.extract_path_params(path).into_iter().collect(),
                after: matched_after,
                allow: Vec::new(),
            }
        }
        None => {
            let allow = matcher.allowed_methods(path);
            Resolution {
                status: if allow.is_empty() { 404 } else { 405 },
                before,
                endpoint: None,
                params: BTreeMap::new(),
                after,
                allow,
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config: MatcherConfig = config::load_config(&cli.config)?;
    init_logging(cli.log_level.as_deref().unwrap_or(&config.observability.log_level));

    let matcher = config.build_matcher()?;

    match cli.command {
        Commands::Check => {
            println!("{}: {} routes OK", cli.config.display(), matcher.len());
        }
        Commands::Routes => {
            let routes: Vec<RouteView<'_>> = matcher.all_entries().map(RouteView::from).collect();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
        Commands::Match { method, path } => {
            let resolution = resolve(&matcher, method, &path);
            tracing::debug!(%method, path = %path, status = resolution.status, "Request resolved");
            println!("{}", serde_json::to_string_pretty(&resolution)?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "route-matcher failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> PathMatcher<String> {
        let mut m = PathMatcher::default();
        let routes = [
            (HandlerType::Before, "*", "log"),
            (HandlerType::BeforeMatched, "/users/*", "auth"),
            (HandlerType::Get, "/users/{id}", "show_user"),
            (HandlerType::Delete, "/users/{id}", "delete_user"),
            (HandlerType::AfterMatched, "/users/*", "audit"),
            (HandlerType::After, "*", "cleanup"),
        ];
        for (ty, path, handler) in routes {
            m.add_route(ty, path, handler.to_string(), BTreeSet::new())
                .unwrap();
        }
        m
    }

    #[test]
    fn test_matched_request_runs_filters_in_order() {
        let m = matcher();
        let res = resolve(&m, HandlerType::Get, "/users/42");

        assert_eq!(res.status, 200);
        assert_eq!(res.before, vec!["log", "auth"]);
        assert_eq!(res.endpoint, Some("show_user"));
        assert_eq!(res.params.get("id").map(String::as_str), Some("42"));
        assert_eq!(res.after, vec!["audit", "cleanup"]);
        assert!(res.allow.is_empty());
    }

    #[test]
    fn test_other_method_match_is_method_not_allowed() {
        let m = matcher();
        let res = resolve(&m, HandlerType::Post, "/users/42");

        assert_eq!(res.status, 405);
        assert_eq!(res.endpoint, None);
        assert_eq!(res.allow, vec![HandlerType::Get, HandlerType::Delete]);
        assert!(res.params.is_empty());
    }

    #[test]
    fn test_no_match_is_not_found() {
        let m = matcher();
        let res = resolve(&m, HandlerType::Get, "/teams/1");

        assert_eq!(res.status, 404);
        assert_eq!(res.endpoint, None);
        assert!(res.allow.is_empty());
    }

    #[test]
    fn test_matched_only_filters_skipped_without_endpoint() {
        let m = matcher();
        let res = resolve(&m, HandlerType::Post, "/users/42");

        assert_eq!(res.before, vec!["log"]);
        assert_eq!(res.after, vec!["cleanup"]);
        assert!(!res.before.contains(&"auth"));
        assert!(!res.after.contains(&"audit"));
    }
}
