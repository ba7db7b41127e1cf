//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path, query)
//!     → resolver.rs (resource resolution)
//!     → Return: Resource (never NoMatch: unknown GETs resolve to Index)
//! ```
//!
//! # Design Decisions
//! - `/api/clients` and `/api?endpoint=clients` are equivalent by design,
//!   a compatibility feature carried over from the hosted-function drafts
//! - Resolution precedence is explicit and ordered, not an `||` chain:
//!   endpoint param > path param > trailing path segment > index
//! - Unknown resources resolve to the discoverability index, not 404

pub mod resolver;

pub use resolver::{resolve_resource, Resource};
