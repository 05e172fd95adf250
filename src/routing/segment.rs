//! Path segment model.
//!
//! # Responsibilities
//! - Represent one `/`-delimited chunk of a path template
//! - Render each chunk as a regex fragment, with or without capture groups
//!
//! # Design Decisions
//! - Closed enum: every consumer matches exhaustively
//! - `Composite` is always flat (never holds another `Composite`)
//! - Parameters are lazy so adjacent literals still get a chance to match

/// Whether a parameter may span several path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlashPolicy {
    /// `{name}`: stops at the next `/`.
    IgnoreSlash,
    /// `<name>`: may contain `/`.
    AcceptSlash,
}

/// A single compiled element of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Static text. `raw_regex` marks text that is already a regex fragment.
    Literal { text: String, raw_regex: bool },

    /// A named capture.
    Parameter { name: String, slash: SlashPolicy },

    /// Unnamed, matches anything including `/`.
    Wildcard,

    /// A mix of the above inside one path segment, e.g. `pre{fix}post`.
    Composite(Vec<PathSegment>),
}

impl PathSegment {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal {
            text: text.into(),
            raw_regex: false,
        }
    }

    /// Static text that is inserted into the pattern without escaping.
    pub fn raw_regex(text: impl Into<String>) -> Self {
        Self::Literal {
            text: text.into(),
            raw_regex: true,
        }
    }

    pub fn parameter(name: impl Into<String>, slash: SlashPolicy) -> Self {
        Self::Parameter {
            name: name.into(),
            slash,
        }
    }

    /// Regex fragment without capture groups, used for plain matching.
    pub fn as_match_regex(&self) -> String {
        match self {
            Self::Literal { text, raw_regex } => literal_regex(text, *raw_regex),
            Self::Parameter { slash, .. } => parameter_body(*slash).to_string(),
            Self::Wildcard => WILDCARD.to_string(),
            Self::Composite(inner) => inner.iter().map(Self::as_match_regex).collect(),
        }
    }

    /// Regex fragment where every parameter is a capture group.
    pub fn as_capture_regex(&self) -> String {
        match self {
            Self::Literal { text, raw_regex } => literal_regex(text, *raw_regex),
            Self::Parameter { slash, .. } => format!("({})", parameter_body(*slash)),
            Self::Wildcard => WILDCARD.to_string(),
            Self::Composite(inner) => inner.iter().map(Self::as_capture_regex).collect(),
        }
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> Vec<&str> {
        match self {
            Self::Parameter { name, .. } => vec![name.as_str()],
            Self::Composite(inner) => inner.iter().flat_map(Self::param_names).collect(),
            Self::Literal { .. } | Self::Wildcard => Vec::new(),
        }
    }
}

const WILDCARD: &str = ".*?";

fn parameter_body(slash: SlashPolicy) -> &'static str {
    match slash {
        SlashPolicy::IgnoreSlash => "[^/]+?",
        SlashPolicy::AcceptSlash => ".+?",
    }
}

fn literal_regex(text: &str, raw_regex: bool) -> String {
    if raw_regex {
        text.to_string()
    } else {
        regex::escape(text)
    }
}
