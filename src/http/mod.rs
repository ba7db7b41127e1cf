//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → middleware.rs (CORS on every response, OPTIONS short-circuit)
//!     → server.rs (single fallback route, method dispatch)
//!     → routing resolver (resource from path or query alias)
//!     → handlers.rs (read handlers with fallback, generation)
//!     → response.rs (stable {success, data, count, source} envelopes)
//!     → error.rs (taxonomy → status codes, message surfaced)
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
