//! Tally - personal expense and income tracker for the terminal
//!
//! Tally records expenses and income, keeps per-category budgets with
//! automatically recomputed spending, and produces spending reports and
//! exports. All data lives in JSON files under a per-user data directory.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, income, budgets, categories)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Aggregation over stored data
//! - `display`: Terminal rendering of models and reports
//! - `export`: CSV, JSON, and plain-text exports
//! - `cli`: clap subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::config::{paths::TallyPaths, settings::Settings};
//! use tally::storage::Storage;
//!
//! let paths = TallyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
