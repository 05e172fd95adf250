//! Method and lifecycle keys used to bucket routes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::routing::error::RoutingError;

/// The key a route is registered under: an HTTP method or a lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandlerType {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Trace,
    Connect,
    Options,
    Before,
    BeforeMatched,
    AfterMatched,
    After,
}

const HTTP_METHODS: [HandlerType; 9] = [
    HandlerType::Get,
    HandlerType::Post,
    HandlerType::Put,
    HandlerType::Patch,
    HandlerType::Delete,
    HandlerType::Head,
    HandlerType::Trace,
    HandlerType::Connect,
    HandlerType::Options,
];

impl HandlerType {
    /// Real HTTP methods, in declaration order.
    pub fn http_methods() -> &'static [HandlerType] {
        &HTTP_METHODS
    }

    /// Lifecycle stages (filters) are not HTTP methods and may share paths.
    pub fn is_http_method(self) -> bool {
        HTTP_METHODS.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Trace => "TRACE",
            Self::Connect => "CONNECT",
            Self::Options => "OPTIONS",
            Self::Before => "BEFORE",
            Self::BeforeMatched => "BEFORE_MATCHED",
            Self::AfterMatched => "AFTER_MATCHED",
            Self::After => "AFTER",
        }
    }
}

impl fmt::Display for HandlerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HandlerType {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase().replace('-', "_");
        match upper.as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "TRACE" => Ok(Self::Trace),
            "CONNECT" => Ok(Self::Connect),
            "OPTIONS" => Ok(Self::Options),
            "BEFORE" => Ok(Self::Before),
            "BEFORE_MATCHED" => Ok(Self::BeforeMatched),
            "AFTER_MATCHED" => Ok(Self::AfterMatched),
            "AFTER" => Ok(Self::After),
            _ => Err(RoutingError::UnknownHandlerType(s.to_string())),
        }
    }
}
