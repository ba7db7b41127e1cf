//! R3ACH Proposal API Library

pub mod config;
pub mod fallback;
pub mod gateway;
pub mod http;
pub mod model;
pub mod observability;
pub mod proposal;
pub mod routing;

pub use config::schema::AppConfig;
pub use gateway::DataGateway;
pub use http::HttpServer;
