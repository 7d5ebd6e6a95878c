//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The catalog is authored statically, so the error surface is small:
//! - Catalog validation failures (duplicate ids, part-count drift)
//! - Viewer configuration errors (unparsable JSON, out-of-range values)
//!
//! Looking up an unknown model id is **not** an error. Registry lookups return
//! `Option` and callers treat a miss as a no-op.
//!
//! # Usage
//!
//! ```rust,ignore
//! use kitbash::errors::Result;
//! use kitbash::ModelRegistry;
//!
//! fn startup() -> Result<()> {
//!     ModelRegistry::global().validate()?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum KitbashError {
    // ========================================================================
    // Catalog Validation Errors
    // ========================================================================
    /// Two catalog entries share the same id.
    #[error("Duplicate model id in catalog: {0}")]
    DuplicateModelId(String),

    /// A definition's declared part count disagrees with what it builds.
    #[error("Model '{id}' declares {declared} parts but builds {built}")]
    PartCountMismatch {
        /// Offending model id
        id: String,
        /// Value from the descriptor
        declared: usize,
        /// Surfaces actually produced by `build`
        built: usize,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Viewer settings could not be parsed.
    #[error("Invalid viewer settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),

    /// A settings value is outside the range the viewer can work with.
    #[error("Invalid viewer setting '{field}': {reason}")]
    InvalidSettingsValue {
        /// Dotted path of the offending key, e.g. `controls.minDistance`
        field: &'static str,
        /// What the value must satisfy
        reason: &'static str,
    },

    /// Viewport dimensions must be non-zero.
    #[error("Invalid viewport size: {width}x{height}")]
    InvalidViewport {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },
}

/// Alias for `Result<T, KitbashError>`.
pub type Result<T> = std::result::Result<T, KitbashError>;
