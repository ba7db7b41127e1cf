//! Upstream data gateway subsystem.
//!
//! # Data Flow
//! ```text
//! Handler request
//!     → query.rs (per-resource query plan: table, order, limit, filters)
//!     → client.rs (Supabase REST read / webhook POST, with timeout)
//!     → Result<rows, GatewayError>
//!     → handler applies fallback policy
//! ```
//!
//! # Design Decisions
//! - Configuration-gated: missing credentials signal Unconfigured without
//!   any network attempt, so demo deployments run offline
//! - Errors carry the upstream status for logging but never escape the
//!   router on read paths
//! - One attempt per call, no retries: fallback data is the resilience
//!   story for reads, and generation jobs must not be duplicated

pub mod client;
pub mod error;
pub mod query;

pub use client::DataGateway;
pub use error::{GatewayError, GatewayResult};
pub use query::CreatorFilters;
