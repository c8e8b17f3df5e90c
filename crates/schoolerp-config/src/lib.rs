//! # School ERP Config
//!
//! Configuration types for the School ERP API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: Document store connection settings
//! - [`schema`]: Request decoding policy
//! - [`server`]: Listen address
//!
//! # Example
//!
//! ```ignore
//! use schoolerp_config::{CorsConfig, DatabaseConfig, SchemaConfig, ServerConfig};
//!
//! let database_config = DatabaseConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod schema;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use schema::{SchemaConfig, UnknownFields};
pub use server::ServerConfig;
