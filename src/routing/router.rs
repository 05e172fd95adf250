//! Route registry and candidate lookup.
//!
//! # Responsibilities
//! - Store compiled routes bucketed by handler type
//! - Reject duplicate (method, path) pairs for HTTP methods
//! - Return every entry matching a request path, in registration order
//!
//! # Design Decisions
//! - Mutated only during setup; lookups take `&self` and never lock
//! - Duplicate detection compares raw path strings, not semantics
//! - Lifecycle stages (before/after filters) may share a path
//! - `*` and exact raw-path hits skip the regex engine

use std::collections::{BTreeSet, HashMap};

use crate::config::RoutingConfig;
use crate::routing::error::RoutingError;
use crate::routing::handler_type::HandlerType;
use crate::routing::matcher::PathParser;

/// A registered route.
#[derive(Debug, Clone)]
pub struct RouteEntry<H> {
    pub handler_type: HandlerType,
    pub parser: PathParser,
    pub handler: H,
    pub roles: BTreeSet<String>,
}

impl<H> RouteEntry<H> {
    pub fn path(&self) -> &str {
        self.parser.raw_path()
    }

    /// Whether this entry accepts `request_path`.
    pub fn matches(&self, request_path: &str) -> bool {
        let path = self.path();
        path == "*" || path == request_path || self.parser.matches(request_path)
    }

    pub fn extract_path_params(&self, request_path: &str) -> HashMap<String, String> {
        self.parser.extract_path_params(request_path)
    }
}

/// Registry of compiled routes.
#[derive(Debug)]
pub struct PathMatcher<H> {
    config: RoutingConfig,
    entries: HashMap<HandlerType, Vec<RouteEntry<H>>>,
}

impl<H> PathMatcher<H> {
    pub fn new(config: RoutingConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
        }
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Compile `path` and register it under `handler_type`.
    pub fn add_route(
        &mut self,
        handler_type: HandlerType,
        path: &str,
        handler: H,
        roles: BTreeSet<String>,
    ) -> Result<(), RoutingError> {
        let parser = PathParser::new(path, &self.config)?;
        self.add(RouteEntry {
            handler_type,
            parser,
            handler,
            roles,
        })
    }

    /// Insert an already compiled entry.
    pub fn add(&mut self, entry: RouteEntry<H>) -> Result<(), RoutingError> {
        let bucket = self.entries.entry(entry.handler_type).or_default();

        if entry.handler_type.is_http_method()
            && bucket.iter().any(|existing| existing.path() == entry.path())
        {
            return Err(RoutingError::DuplicateRoute {
                handler_type: entry.handler_type,
                path: entry.path().to_string(),
            });
        }

        tracing::debug!(
            handler_type = %entry.handler_type,
            path = entry.path(),
            params = ?entry.parser.path_param_names(),
            "Route registered"
        );
        bucket.push(entry);
        Ok(())
    }

    /// Entries of `handler_type` matching `request_path`, in registration order.
    pub fn find_entries<'a>(
        &'a self,
        handler_type: HandlerType,
        request_path: &'a str,
    ) -> impl Iterator<Item = &'a RouteEntry<H>> + 'a {
        self.entries(handler_type)
            .filter(move |entry| entry.matches(request_path))
    }

    /// Whether any entry of `handler_type` matches `request_path`.
    pub fn has_entries(&self, handler_type: HandlerType, request_path: &str) -> bool {
        let found = self
            .entries(handler_type)
            .any(|entry| entry.matches(request_path));
        tracing::trace!(%handler_type, request_path, found, "Route lookup");
        found
    }

    /// Every entry of `handler_type`, in registration order.
    pub fn entries(&self, handler_type: HandlerType) -> impl Iterator<Item = &RouteEntry<H>> {
        self.entries
            .get(&handler_type)
            .into_iter()
            .flat_map(|bucket| bucket.iter())
    }

    /// Every entry, grouped by handler type in declaration order.
    pub fn all_entries(&self) -> impl Iterator<Item = &RouteEntry<H>> {
        let mut types: Vec<HandlerType> = self.entries.keys().copied().collect();
        types.sort();
        types
            .into_iter()
            .flat_map(move |ty| self.entries(ty))
    }

    /// HTTP methods with at least one entry matching `request_path`.
    pub fn allowed_methods(&self, request_path: &str) -> Vec<HandlerType> {
        HandlerType::http_methods()
            .iter()
            .copied()
            .filter(|&method| self.has_entries(method, request_path))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H> Default for PathMatcher<H> {
    fn default() -> Self {
        Self::new(RoutingConfig::default())
    }
}
