//! Unified error types for battguard
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error reading from a battery source
    #[error("Battery source error: {0}")]
    Source(#[from] SourceError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from domain type validation
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// Notification channel failure
    #[error("Notification failed: {0}")]
    Notify(String),

    /// Failed to install the shutdown signal handler
    #[error("Failed to set signal handler: {0}")]
    Signal(String),

    /// No battery detected under the power supply root
    #[error("No battery detected")]
    NoBatteryFound,

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from battery sources
#[derive(Error, Debug)]
pub enum SourceError {
    /// Battery not found by name
    #[error("Battery not found: {0}")]
    NotFound(String),

    /// Failed to read an attribute
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    /// Reading could not be parsed
    #[error("Malformed reading: {0}")]
    Parse(String),

    /// A recorded source has no more readings
    #[error("No more readings")]
    Exhausted,
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Battery scale must be positive
    #[error("Invalid battery scale: {0} (must be > 0)")]
    InvalidScale(i64),

    /// Numeric status code outside the known table
    #[error("Invalid charge status code: {0}")]
    InvalidStatusCode(i64),

    /// Status word not recognized
    #[error("Unknown charge status: {0}")]
    UnknownStatus(String),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
