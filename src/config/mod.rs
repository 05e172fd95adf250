//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MatcherConfig (validated, immutable)
//!     → build_matcher() compiles every route into a PathMatcher
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_matcher, parse_config, ConfigError};
pub use schema::MatcherConfig;
pub use schema::ObservabilityConfig;
pub use schema::RouteConfig;
pub use schema::RoutingConfig;
