//! Route path-matching engine.
//!
//! Compiles path templates such as `/users/{id}`, `/files/<path>` or
//! `/assets/*` into regex-backed matchers, keeps them in a registry keyed
//! by HTTP method or lifecycle stage, and extracts named parameters from
//! matching request paths.
//!
//! ```
//! use std::collections::BTreeSet;
//! use route_matcher::config::RoutingConfig;
//! use route_matcher::routing::{HandlerType, PathMatcher};
//!
//! let mut matcher = PathMatcher::new(RoutingConfig::default());
//! matcher
//!     .add_route(HandlerType::Get, "/users/{id}", "show_user", BTreeSet::new())
//!     .unwrap();
//!
//! let entry = matcher.find_entries(HandlerType::Get, "/users/42").next().unwrap();
//! assert_eq!(entry.handler, "show_user");
//! assert_eq!(entry.extract_path_params("/users/42")["id"], "42");
//! ```

pub mod config;
pub mod observability;
pub mod routing;

pub use config::{MatcherConfig, RoutingConfig};
pub use routing::{HandlerType, PathMatcher, PathParser, RouteEntry, RoutingError};
