//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use route_matcher::config::RoutingConfig;
use route_matcher::routing::{HandlerType, PathMatcher};

/// Build a matcher with one GET route per path; the handler is the path itself.
pub fn matcher_with(config: RoutingConfig, paths: &[&str]) -> PathMatcher<String> {
    let mut matcher = PathMatcher::new(config);
    for path in paths {
        matcher
            .add_route(HandlerType::Get, path, path.to_string(), BTreeSet::new())
            .unwrap();
    }
    matcher
}

/// Params extracted by the first GET entry matching `uri`, if any.
pub fn params_for(matcher: &PathMatcher<String>, uri: &str) -> Option<HashMap<String, String>> {
    matcher
        .find_entries(HandlerType::Get, uri)
        .next()
        .map(|entry| entry.extract_path_params(uri))
}

/// Build a param map from literal pairs.
pub fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Write `content` to a uniquely named file in the system temp directory.
pub fn write_temp_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "route-matcher-{}-{}.toml",
        name,
        std::process::id()
    ));
    std::fs::write(&path, content).unwrap();
    path
}
