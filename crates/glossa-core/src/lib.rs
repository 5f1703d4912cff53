//! # glossa-core
//!
//! Core types, traits, configuration, and error handling for glossa.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod language;
pub mod overrides;
pub mod traits;

pub use config::shellexpand;
