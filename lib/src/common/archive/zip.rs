//! # StudyArch ZIP Archive Operations (`common::archive::zip`)
//!
//! File: lib/src/common/archive/zip.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! This module provides functionality for creating the zip container that
//! becomes the final `.studyarch` artifact. Its single job within StudyArch
//! is to pack the staged directory tree (`base/zip_directory/…`) into one
//! compressed file placed in the base directory.
//!
//! ## Architecture
//!
//! The module leverages the `walkdir` crate for deterministic traversal and
//! the `zip` crate for writing the container.
//!
//! - The contents of the source directory are walked depth-first with
//!   siblings sorted by file name, so repeated dumps of the same tree
//!   produce the same entry order.
//! - Entry names are recorded relative to the source directory root, so the
//!   artifact opens straight into `Archive/`.
//! - Directory entries are emitted explicitly; an empty `Groups/` directory
//!   therefore survives into the artifact.
//! - Files are deflate-compressed at the `zip` crate's default level.
//!
//! ## Usage
//!
//! The main function `zip_directory_contents` writes the archive to a file.
//!
//! ```ignore
//! use crate::common::archive::zip;
//!
//! // Pack the staged tree; `arch.zip` lands next to the staging directory.
//! zip::zip_directory_contents(staging_dir, &base_dir.join("arch.zip"))?;
//! ```
//!
use crate::core::error::{Result, StudyArchError}; // Use the standard Result type from the core module
use anyhow::Context; // For adding contextual information to errors
use std::io::Write; // Brings `write_all` into scope for the zip writer
use std::{fs, path::Path}; // Filesystem module and path type
use tracing::{debug, info}; // Logging utilities
use walkdir::WalkDir; // Recursive directory traversal
use zip::write::{SimpleFileOptions, ZipWriter}; // ZIP container writer

/// # Create ZIP Container From Staged Tree (`zip_directory_contents`)
///
/// Compresses the *contents* of `source_dir` into a zip file at `dest_file`.
///
/// Entry names inside the container are relative to `source_dir`, so the
/// source directory itself does not appear in the archive — its children
/// form the archive root. Directory entries are written explicitly so empty
/// directories are preserved. All file entries use deflate compression at
/// the default level.
///
/// ## Arguments
///
/// * `source_dir` - A `&Path` reference to the directory whose contents
///   should be archived. This directory *must* exist.
/// * `dest_file` - A `&Path` reference to the zip file to create. An
///   existing file at this path is overwritten. On failure a partially
///   written file may be left behind (no cleanup is attempted).
///
/// ## Returns
///
/// * `Result<()>` - Returns `Ok(())` once the container has been fully
///   written and finalized.
///
/// ## Errors
///
/// Returns an `Err` if:
/// - The destination file cannot be created.
/// - The source tree cannot be traversed or a file within it cannot be read.
/// - Writing an entry or finalizing the container fails
///   (`StudyArchError::Zip`).
pub fn zip_directory_contents(source_dir: &Path, dest_file: &Path) -> Result<()> {
    info!(
        "Packing staged tree {:?} into zip container {:?}",
        source_dir, dest_file
    );

    // Create (or truncate) the destination file.
    let file = fs::File::create(dest_file)
        .with_context(|| format!("Failed to create zip file {:?}", dest_file))?;
    // Wrap it in the zip writer; entries are appended through this handle.
    let mut zip_writer = ZipWriter::new(file);
    // All file entries use deflate at the default compression level.
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    // Walk the staged tree. `min_depth(1)` skips the source directory itself
    // (its contents form the archive root); sorting makes the entry order
    // reproducible across dumps.
    for entry in WalkDir::new(source_dir).min_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| {
            format!("Failed to traverse staged directory {:?}", source_dir)
        })?;

        // Record the entry name relative to the archive root, with forward
        // slashes as the zip format requires.
        let relative = entry
            .path()
            .strip_prefix(source_dir)
            .with_context(|| format!("Failed to relativize path {:?}", entry.path()))?;
        let name = relative.to_string_lossy().replace('\\', "/");

        if entry.file_type().is_dir() {
            // Emit the directory entry explicitly so empty directories
            // (e.g., a Groups/ with no groups) survive into the artifact.
            zip_writer
                .add_directory(name.as_str(), options)
                .map_err(StudyArchError::from)?;
            debug!("Added directory entry: {}/", name);
        } else {
            // Start a file entry, then stream the staged file's bytes in.
            zip_writer
                .start_file(name.as_str(), options)
                .map_err(StudyArchError::from)?;
            let bytes = fs::read(entry.path())
                .with_context(|| format!("Failed to read staged file {:?}", entry.path()))?;
            zip_writer
                .write_all(&bytes)
                .with_context(|| format!("Failed to write zip entry '{}'", name))?;
            debug!("Added file entry: {} ({} bytes)", name, bytes.len());
        }
    }

    // Finalize the container. This writes the central directory; without it
    // the file is not a valid zip.
    zip_writer.finish().map_err(StudyArchError::from)?;
    info!("Finished zip container {:?}", dest_file);
    Ok(())
}
