//! # School ERP CLI
//!
//! Database seeding utilities for School ERP testing and development.
//!
//! This library crate provides the seeding functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use schoolerp_cli::seeder::{SeedConfig, seed_all};
//!
//! let store = schoolerp_db::connect("memory://", None, 1).await?;
//! let summary = seed_all(store.as_ref(), &SeedConfig::default()).await?;
//! ```

pub mod seeder;
