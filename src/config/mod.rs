//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overlay (SUPABASE_URL, SUPABASE_SERVICE_ROLE_KEY, N8N_WEBHOOK_URL)
//!     → semantic validation (URL syntax)
//!     → AppConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults so the server starts with no config at all
//! - Missing upstream credentials are valid configuration, not an error:
//!   the gateway degrades to fallback data instead of refusing to start

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
pub use schema::FallbackConfig;
pub use schema::SupabaseConfig;
pub use schema::WebhookConfig;
