//! Proposal template engine.
//!
//! # Design Decisions
//! - Pure string construction: no I/O, no branching on external state
//! - The generation timestamp is injected so rendering is deterministic
//!   under test; the wall-clock wrapper lives next to it
//! - Validation runs at the request boundary and names the missing field
//!   with the exact wire message the clients already depend on

pub mod engine;

pub use engine::{render, render_at, validate, ValidationError};
