//! # todoli-core - Core Domain Types
//!
//! Foundation crate for Todoli. Provides the failure taxonomy and the
//! logging setup shared by every layer.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (thiserror, tracing).
//!
//! ## Public API
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Closed failure taxonomy (`NotFound`, `Validation`,
//!   `Duplicate`, plus `Unexpected` for wrapped foreign failures)
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for wrapping foreign errors at a boundary
//!
//! ### Logging (`logging`)
//! - [`logging::init()`] - Install the tracing subscriber, returning a
//!   [`LogGuard`] the entry point owns for the life of the process
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use todoli_core::prelude::*;
//! ```

pub mod error;
pub mod logging;

/// Prelude for common imports used throughout all Todoli crates
pub mod prelude;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use logging::LogGuard;
