//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     raw path template
//!     → lexer.rs (split on '/', one PathSegment per chunk)
//!     → matcher.rs (parameter-name checks)
//!     → compiler.rs (match + capture regexes)
//!     → router.rs (bucket by handler type, reject duplicates)
//!
//! Incoming Request (method, path):
//!     → router.rs (scan bucket in registration order)
//!     → matcher.rs (regex match, then parameter extraction)
//!     → Return: matching entries + decoded parameter map
//! ```
//!
//! # Design Decisions
//! - Templates compiled at startup, immutable at runtime
//! - Every error is a registration error; matching is total
//! - Deterministic: entries are returned in registration order

pub mod compiler;
pub mod error;
pub mod handler_type;
pub mod lexer;
pub mod matcher;
pub mod router;
pub mod segment;

pub use error::RoutingError;
pub use handler_type::HandlerType;
pub use matcher::PathParser;
pub use router::{PathMatcher, RouteEntry};
pub use segment::{PathSegment, SlashPolicy};
