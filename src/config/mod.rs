//! Configuration module for envelope-balance
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Output preferences

pub mod paths;
pub mod settings;

pub use paths::BalancePaths;
pub use settings::{OutputFormat, Settings};
