//! Compiled path templates.
//!
//! # Responsibilities
//! - Validate a raw template and lex it segment by segment
//! - Enforce unique parameter names across the whole template
//! - Decide whether a request path matches
//! - Extract and percent-decode parameter values
//!
//! # Design Decisions
//! - Compiled once at registration, immutable afterwards
//! - Matching uses ungrouped regexes; capture regexes only run on a
//!   path already known to match
//! - Values are percent-decoded but `+` is kept as-is (path, not form, semantics)

use std::collections::{HashMap, HashSet};

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::config::RoutingConfig;
use crate::routing::compiler::{self, CompiledPatterns};
use crate::routing::error::RoutingError;
use crate::routing::lexer;
use crate::routing::segment::PathSegment;

/// A path template compiled into regexes.
#[derive(Debug, Clone)]
pub struct PathParser {
    raw_path: String,
    segments: Vec<PathSegment>,
    param_names: Vec<String>,
    patterns: CompiledPatterns,
}

impl PathParser {
    /// Compile `raw_path` under the given routing policy.
    pub fn new(raw_path: &str, config: &RoutingConfig) -> Result<Self, RoutingError> {
        if raw_path.contains("/:") {
            return Err(RoutingError::LegacyColonSyntax {
                path: raw_path.to_string(),
            });
        }

        let match_every_sub_path = raw_path.ends_with("}*") || raw_path.ends_with(">*");
        let to_parse = if match_every_sub_path {
            &raw_path[..raw_path.len() - 1]
        } else {
            raw_path
        };

        let segments = to_parse
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| lexer::parse_segment(s, raw_path, config.regex_literals))
            .collect::<Result<Vec<_>, _>>()?;

        let param_names: Vec<String> = segments
            .iter()
            .flat_map(PathSegment::param_names)
            .map(str::to_string)
            .collect();
        let unique: HashSet<&str> = param_names.iter().map(String::as_str).collect();
        if unique.len() != param_names.len() {
            return Err(RoutingError::ParameterNamesNotUnique {
                path: raw_path.to_string(),
            });
        }

        let patterns = compiler::compile(raw_path, &segments, config, match_every_sub_path)?;

        Ok(Self {
            raw_path: raw_path.to_string(),
            segments,
            param_names,
            patterns,
        })
    }

    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Parameter names in declaration order.
    pub fn path_param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Returns true if `uri` fully matches the template.
    pub fn matches(&self, uri: &str) -> bool {
        self.patterns.matching.iter().any(|re| re.is_match(uri))
    }

    /// Extract decoded parameter values from `uri`.
    ///
    /// Returns an empty map if `uri` does not match.
    pub fn extract_path_params(&self, uri: &str) -> HashMap<String, String> {
        let Some(index) = self.patterns.matching.iter().position(|re| re.is_match(uri)) else {
            return HashMap::new();
        };
        let values = capture_values(&self.patterns.capturing[index], uri);

        self.param_names
            .iter()
            .cloned()
            .zip(values.into_iter().map(|v| url_decode(&v)))
            .collect()
    }
}

fn capture_values(re: &Regex, uri: &str) -> Vec<String> {
    match re.captures(uri) {
        Some(caps) => caps
            .iter()
            .skip(1)
            .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
            .collect(),
        None => Vec::new(),
    }
}

fn url_decode(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(path: &str) -> PathParser {
        PathParser::new(path, &RoutingConfig::default()).unwrap()
    }

    #[test]
    fn test_literal_path() {
        let p = parser("/hello/world");
        assert!(p.matches("/hello/world"));
        assert!(!p.matches("/hello/world/more"));
        assert!(p.extract_path_params("/hello/world").is_empty());
    }

    #[test]
    fn test_param_names_follow_declaration_order() {
        let p = parser("/{b}/x-{a}/<c>");
        assert_eq!(p.path_param_names(), &["b", "a", "c"]);
    }

    #[test]
    fn test_extract_decodes_percent_but_keeps_plus() {
        let p = parser("/search/{term}");
        let params = p.extract_path_params("/search/a%20b+c");
        assert_eq!(params.get("term").map(String::as_str), Some("a b+c"));
    }

    #[test]
    fn test_extract_from_composite_segment() {
        let p = parser("/img/thumb-{id}.png");
        assert!(p.matches("/img/thumb-42.png"));
        assert!(!p.matches("/img/thumb-42.jpg"));
        let params = p.extract_path_params("/img/thumb-42.png");
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_extract_on_non_matching_uri_is_empty() {
        let p = parser("/users/{id}");
        assert!(p.extract_path_params("/teams/1").is_empty());
    }

    #[test]
    fn test_legacy_colon_syntax_is_rejected() {
        let err = PathParser::new("/users/:id", &RoutingConfig::default()).unwrap_err();
        assert!(matches!(err, RoutingError::LegacyColonSyntax { .. }));
    }

    #[test]
    fn test_duplicate_names_within_one_segment() {
        let err = PathParser::new("/{x}-{x}", &RoutingConfig::default()).unwrap_err();
        assert!(matches!(err, RoutingError::ParameterNamesNotUnique { .. }));
    }

    #[test]
    fn test_root_path_has_no_segments() {
        let p = parser("/");
        assert!(p.segments().is_empty());
        assert!(p.matches("/"));
        assert!(!p.matches("/a"));
    }

    #[test]
    fn test_regex_literals_escape_hatch() {
        let config = RoutingConfig {
            regex_literals: true,
            ..RoutingConfig::default()
        };
        let p = PathParser::new("/v[0-9]+/{id}", &config).unwrap();
        assert!(p.matches("/v2/7"));
        assert!(!p.matches("/vx/7"));
    }
}
