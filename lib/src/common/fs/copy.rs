//! # StudyArch Filesystem Copy Operations
//!
//! File: lib/src/common/fs/copy.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! This module provides the flat media-copy operation used while dumping a
//! content container. Every `image`/`audio` facet references a file
//! somewhere on the caller's filesystem; at dump time that file is copied
//! *flat* into the container's own staging directory (the original
//! subdirectory structure is intentionally lost), and the table records only
//! the base file name.
//!
//! ## Architecture
//!
//! The primary function, `copy_file_flat`, resolves the destination as the
//! explicit joined path `target_dir.join(base_name)` — never against the
//! ambient working directory — so the staged file always lands next to the
//! `Data.csv` that references it, regardless of where the process was
//! started from.
//!
//! Error handling wraps `std::fs` errors into the application's standard
//! `Result` type using `anyhow` for context.
//!
//! ## Usage
//!
//! This utility is used internally by `ContentContainer::dump_contents`.
//!
//! ```ignore
//! use crate::common::fs::copy;
//!
//! // Copy "clips/bonjour.mp3" into the group's staging directory and get
//! // back the cell value to record ("bonjour.mp3").
//! let base_name = copy::copy_file_flat(Path::new("clips/bonjour.mp3"), group_dir)?;
//! ```
//!
use crate::core::error::{Result, StudyArchError}; // Use standard Result type from core::error
use anyhow::Context; // For adding contextual information to errors
use std::fs; // Standard filesystem module
use std::path::Path; // Filesystem path type
use tracing::debug; // Logging utilities

/// Copies a single file flat into a target directory.
///
/// The destination is always `target_dir/<base name of source>`; any
/// directory components of `source` are discarded. If a file with the same
/// base name already exists in `target_dir` it is overwritten (last writer
/// wins, matching the table's last-recorded cell).
///
/// # Arguments
///
/// * `source` - A `&Path` reference to the media file to copy. Must exist.
/// * `target_dir` - A `&Path` reference to the container's staging directory.
///   Must already exist (containers create their directories eagerly).
///
/// # Returns
///
/// * `Result<String>` - The base file name that was written into
///   `target_dir`, i.e. the value to record in the table cell.
///
/// # Errors
///
/// Returns an `Err` if:
/// - `source` has no base name component (e.g., a root or `..` path).
/// - The source file does not exist or cannot be read.
/// - The destination cannot be written (e.g., permissions).
pub fn copy_file_flat(source: &Path, target_dir: &Path) -> Result<String> {
    // Extract the base file name; reject pathological sources up front.
    let base_name = source
        .file_name()
        .ok_or_else(|| {
            StudyArchError::FileSystem(format!("Media path has no file name: {:?}", source))
        })?
        .to_string_lossy()
        .into_owned();

    // Resolve the destination against the container directory explicitly.
    // The ambient working directory plays no part in this path.
    let destination = target_dir.join(&base_name);

    // Perform the copy. `fs::copy` overwrites an existing destination.
    fs::copy(source, &destination).with_context(|| {
        format!(
            "Failed to copy media file {:?} to {:?}",
            source, destination
        )
    })?;
    // Log the staged copy (debug level; one line per media file).
    debug!("Copied media file {:?} -> {:?}", source, destination);

    Ok(base_name) // The cell value to record.
}
