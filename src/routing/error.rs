//! Route registration errors.
//!
//! Every variant is raised while routes are being registered. Matching a
//! request never fails: a URI either matches or it does not.

use thiserror::Error;

use crate::routing::handler_type::HandlerType;

/// Errors raised while compiling or registering a path template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// Unbalanced or misplaced `{}`/`<>` delimiters.
    #[error("missing or misplaced brackets in segment '{segment}' of path '{path}'")]
    MissingBrackets { segment: String, path: String },

    /// `*` directly next to a parameter delimiter.
    #[error("wildcard and parameter delimiter are adjacent in segment '{segment}' of path '{path}'")]
    WildcardBracketAdjacent { segment: String, path: String },

    /// The same parameter name appears more than once.
    #[error("duplicate path parameter names in path '{path}'")]
    ParameterNamesNotUnique { path: String },

    /// The method already owns a route with this exact path.
    #[error("handler with type '{handler_type}' and path '{path}' already exists")]
    DuplicateRoute { handler_type: HandlerType, path: String },

    /// Old `/:name` parameter syntax.
    #[error("path '{path}' uses ':param' syntax, declare parameters as '{{param}}' instead")]
    LegacyColonSyntax { path: String },

    /// The generated pattern was rejected by the regex engine.
    #[error("path '{path}' compiles to an invalid regex: {reason}")]
    InvalidRegex { path: String, reason: String },

    /// A method/lifecycle name that is not a known handler type.
    #[error("unknown handler type '{0}'")]
    UnknownHandlerType(String),
}
