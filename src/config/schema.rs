//! Configuration schema definitions.
//!
//! This module defines the route table file layout.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::routing::{HandlerType, PathMatcher, RoutingError};

/// Root configuration: routing policy plus the routes to register.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MatcherConfig {
    /// Routing policy shared by every route.
    pub routing: RoutingConfig,

    /// Route definitions, registered in file order.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl MatcherConfig {
    /// Compile and register every route in file order.
    pub fn build_matcher(&self) -> Result<PathMatcher<String>, RoutingError> {
        let mut matcher = PathMatcher::new(self.routing.clone());
        for route in &self.routes {
            matcher.add_route(
                route.method,
                &route.path,
                route.handler.clone(),
                route.roles.clone(),
            )?;
        }
        tracing::info!(routes = matcher.len(), "Route table compiled");
        Ok(matcher)
    }
}

/// Path matching policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Accept an extra trailing `/` on request paths.
    pub ignore_trailing_slashes: bool,

    /// Treat `//` (and longer runs) in request paths as a single `/`.
    pub treat_multiple_slashes_as_single_slash: bool,

    /// Match request paths case-insensitively.
    pub case_insensitive: bool,

    /// Insert literal template text into the regex unescaped.
    pub regex_literals: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            ignore_trailing_slashes: true,
            treat_multiple_slashes_as_single_slash: false,
            case_insensitive: false,
            regex_literals: false,
        }
    }
}

/// A single route declaration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// HTTP method or lifecycle stage (e.g. "GET", "BEFORE").
    pub method: HandlerType,

    /// Path template (e.g. "/users/{id}").
    pub path: String,

    /// Handler identifier reported on match.
    pub handler: String,

    /// Roles required to access the route.
    #[serde(default)]
    pub roles: BTreeSet<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
