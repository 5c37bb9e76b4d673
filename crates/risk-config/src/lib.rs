//! Configuration and file management for risk-dashboard
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig) with environment overrides

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, SERVICE_URL_ENV};
pub use config_file::load_config_file;
