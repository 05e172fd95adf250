//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing + config produce:
//!     → tracing events (registration at debug, lookups at trace)
//!     → logging.rs (subscriber + level filter)
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; the binary installs the subscriber
//! - Lookups log at trace to stay quiet on the request path

pub mod logging;

pub use logging::init_logging;
