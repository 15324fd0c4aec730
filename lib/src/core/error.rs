//! # StudyArch Error Types
//!
//! File: lib/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout the StudyArch library. It provides a consistent approach to
//! error management with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `StudyArchError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the domains the archive builder touches:
//! - Settings (layout name) validation errors
//! - Filesystem errors (paths occupied by non-directories, pathological media paths)
//! - Group naming conflicts
//! - Zip compression errors
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```ignore
//! // Return a specific error type
//! if !path.is_dir() {
//!     return Err(StudyArchError::FileSystem(format!("Path is not a directory: {}", path.display())))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
//! The error system provides detailed error messages to the caller and
//! includes context information for debugging.
//!
use thiserror::Error;

/// Custom error type for the StudyArch library.
#[derive(Error, Debug)]
pub enum StudyArchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Group '{name}' already exists under this parent.")]
    GroupNameConflict { name: String },

    #[error("Zip archive operation failed: {source}")]
    Zip {
        #[from]
        source: zip::result::ZipError,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
