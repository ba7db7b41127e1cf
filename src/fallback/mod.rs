//! Fallback data subsystem.
//!
//! # Design Decisions
//! - Pure and deterministic: no I/O, same records on every call
//! - Sample records match the live row shapes exactly so callers can swap
//!   fallback and live data without a shape mismatch
//! - Proposals have no samples: an empty list is a legitimate answer there

pub mod samples;

pub use samples::{sample_clients, sample_creators, sample_templates, with_fallback, Source};
