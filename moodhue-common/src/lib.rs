//! # moodhue Common Library
//!
//! Shared code for the moodhue services including:
//! - Error type and result alias
//! - Configuration loading and root folder resolution
//! - SQLite initialization and row models for stored palettes

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
