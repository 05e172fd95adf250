//! Regex generation for compiled path templates.
//!
//! # Responsibilities
//! - Join rendered segments with the configured slash separator
//! - Append the trailing-slash suffix
//! - Emit a second pattern for "match and everything below" templates
//!
//! # Design Decisions
//! - Matching and capturing patterns are built in parallel, index for index
//! - Case folding is a regex flag, the pattern text never changes

use regex::{Regex, RegexBuilder};

use crate::config::RoutingConfig;
use crate::routing::error::RoutingError;
use crate::routing::segment::PathSegment;

/// The match and capture regexes for one template.
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    /// Ungrouped, used for the match decision.
    pub matching: Vec<Regex>,
    /// Same structure with one group per parameter, used for extraction.
    pub capturing: Vec<Regex>,
}

/// Build both regex lists for `segments`.
pub fn compile(
    path: &str,
    segments: &[PathSegment],
    config: &RoutingConfig,
    match_every_sub_path: bool,
) -> Result<CompiledPatterns, RoutingError> {
    let suffix = trailing_suffix(path, config);

    let mut variants = vec![segments.to_vec()];
    if match_every_sub_path {
        let mut below = segments.to_vec();
        below.push(PathSegment::Wildcard);
        variants.push(below);
    }

    let mut matching = Vec::with_capacity(variants.len());
    let mut capturing = Vec::with_capacity(variants.len());
    for variant in &variants {
        let plain = render(variant, config, suffix, PathSegment::as_match_regex);
        let grouped = render(variant, config, suffix, PathSegment::as_capture_regex);
        matching.push(build(path, &plain, config)?);
        capturing.push(build(path, &grouped, config)?);
    }

    Ok(CompiledPatterns {
        matching,
        capturing,
    })
}

/// Suffix appended after the last segment.
pub fn trailing_suffix(path: &str, config: &RoutingConfig) -> &'static str {
    if path == "/" {
        ""
    } else if path.ends_with('/') {
        if config.treat_multiple_slashes_as_single_slash {
            "/+"
        } else {
            "/"
        }
    } else if config.ignore_trailing_slashes {
        if config.treat_multiple_slashes_as_single_slash {
            "/*"
        } else {
            "/?"
        }
    } else {
        ""
    }
}

fn render(
    segments: &[PathSegment],
    config: &RoutingConfig,
    suffix: &str,
    fragment: fn(&PathSegment) -> String,
) -> String {
    let separator = if config.treat_multiple_slashes_as_single_slash {
        "/+"
    } else {
        "/"
    };
    let body = segments
        .iter()
        .map(fragment)
        .collect::<Vec<_>>()
        .join(separator);
    format!("^{separator}{body}{suffix}$")
}

fn build(path: &str, pattern: &str, config: &RoutingConfig) -> Result<Regex, RoutingError> {
    RegexBuilder::new(pattern)
        .case_insensitive(config.case_insensitive)
        .build()
        .map_err(|e| RoutingError::InvalidRegex {
            path: path.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::segment::SlashPolicy;

    fn config(ignore_trailing: bool, multi_slash: bool) -> RoutingConfig {
        RoutingConfig {
            ignore_trailing_slashes: ignore_trailing,
            treat_multiple_slashes_as_single_slash: multi_slash,
            ..RoutingConfig::default()
        }
    }

    #[test]
    fn test_suffix_table() {
        let cases = [
            ("/", true, true, ""),
            ("/", false, false, ""),
            ("/a/", true, true, "/+"),
            ("/a/", false, true, "/+"),
            ("/a/", true, false, "/"),
            ("/a/", false, false, "/"),
            ("/a", true, true, "/*"),
            ("/a", true, false, "/?"),
            ("/a", false, true, ""),
            ("/a", false, false, ""),
        ];
        for (path, ignore_trailing, multi_slash, expected) in cases {
            assert_eq!(
                trailing_suffix(path, &config(ignore_trailing, multi_slash)),
                expected,
                "path={path} ignore_trailing={ignore_trailing} multi_slash={multi_slash}"
            );
        }
    }

    #[test]
    fn test_patterns_are_anchored_and_parallel() {
        let segments = vec![
            PathSegment::literal("users"),
            PathSegment::parameter("id", SlashPolicy::IgnoreSlash),
        ];
        let compiled = compile("/users/{id}", &segments, &config(false, false), false).unwrap();
        assert_eq!(compiled.matching.len(), 1);
        assert_eq!(compiled.matching[0].as_str(), "^/users/[^/]+?$");
        assert_eq!(compiled.capturing[0].as_str(), "^/users/([^/]+?)$");
    }

    #[test]
    fn test_multiple_slash_separator() {
        let segments = vec![PathSegment::literal("a"), PathSegment::literal("b")];
        let compiled = compile("/a/b", &segments, &config(true, true), false).unwrap();
        assert_eq!(compiled.matching[0].as_str(), "^/+a/+b/*$");
    }

    #[test]
    fn test_every_sub_path_adds_wildcard_variant() {
        let segments = vec![
            PathSegment::literal("files"),
            PathSegment::parameter("f", SlashPolicy::IgnoreSlash),
        ];
        let compiled = compile("/files/{f}*", &segments, &config(false, false), true).unwrap();
        assert_eq!(compiled.matching.len(), 2);
        assert_eq!(compiled.capturing.len(), 2);
        assert_eq!(compiled.matching[1].as_str(), "^/files/[^/]+?/.*?$");
        assert_eq!(compiled.capturing[1].as_str(), "^/files/([^/]+?)/.*?$");
    }

    #[test]
    fn test_root_path() {
        let compiled = compile("/", &[], &config(true, false), false).unwrap();
        assert_eq!(compiled.matching[0].as_str(), "^/$");
    }

    #[test]
    fn test_invalid_raw_regex_is_reported() {
        let segments = vec![PathSegment::raw_regex("(unclosed")];
        let err = compile("/(unclosed", &segments, &config(false, false), false).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidRegex { .. }));
    }
}
