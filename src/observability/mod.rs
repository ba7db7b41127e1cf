//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Log level configurable via RUST_LOG or config
//! - No metrics endpoint: this service is request-scoped glue, and the
//!   structured request logs carry everything operators have asked for

pub mod logging;

pub use logging::init_tracing;
