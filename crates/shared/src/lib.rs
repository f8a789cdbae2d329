//! Shared identifiers, money helpers, and configuration for Fairshare.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe participant and payment references
//! - Decimal money helpers (currency scale, tolerance, rounding)
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
