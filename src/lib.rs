//! Todoli Library
//!
//! A minimal todo list application skeleton: configuration loading,
//! lifecycle state, and a single failure surface built on `todoli-core`.

// Module declarations
pub mod app;
pub mod config;

// Re-export main entry points
pub use app::{run, App, AppPhase};
