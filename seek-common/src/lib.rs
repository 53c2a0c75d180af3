//! Common utilities shared across the seek crates.
//!
//! This crate is intentionally small so that every crate can depend on it
//! without pulling heavy transitive costs. Today it carries the
//! [`observability`] helpers used by the `seek` binary and by integration
//! tests.
//!
//! ```rust
//! use seek_common::observability::{LogConfig, LogFormat};
//!
//! let cfg = LogConfig {
//!     format: LogFormat::Json,
//!     ..LogConfig::default()
//! };
//! assert_eq!(cfg.app_name, "seek");
//! ```

pub mod observability;
