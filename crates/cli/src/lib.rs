//! CLI tool for inspecting trace endpoints.
//!
//! Provides commands for:
//! - Classifying IPv6 addresses as embedded-IPv4 or native
//! - Building endpoints and printing their canonical rendering

pub mod commands;
pub mod config;

pub use commands::Command;
pub use config::CliConfig;
