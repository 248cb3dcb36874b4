//! kakeibo - Terminal-based daily expense diary
//!
//! This library provides the core functionality for the kakeibo expense
//! diary. Users log dated cash/card expenses, browse them by day, and view
//! aggregated spending statistics over daily, weekly, monthly, and yearly
//! windows.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, ids)
//! - `storage`: JSON file storage layer behind the `ExpenseStore` trait
//! - `services`: Business logic layer
//! - `stats`: Date-range resolution and spending aggregation
//! - `calendar`: Calendar-grid date helpers
//! - `display`: Terminal output formatting
//! - `export`: CSV/JSON/YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use kakeibo::config::{paths::KakeiboPaths, settings::Settings};
//!
//! let paths = KakeiboPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod calendar;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod stats;
pub mod storage;

pub use error::{KakeiboError, KakeiboResult};
