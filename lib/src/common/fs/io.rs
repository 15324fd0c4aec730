//! # StudyArch Filesystem I/O Operations
//!
//! File: lib/src/common/fs/io.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! This module centralizes the fundamental filesystem input/output (I/O)
//! operations required by the archive builder. It provides convenient,
//! robust wrappers around standard library `std::fs` functions for ensuring
//! staging directories exist and writing staged table files.
//!
//! ## Architecture
//!
//! The module offers two focused utility functions:
//! - **`ensure_dir_exists`**: Checks if a directory exists at the given path. If not, it creates the directory, including any necessary parent directories (`fs::create_dir_all`). It also validates that if a path *does* exist, it is actually a directory. This is what makes `StudyArchive` construction fail fast when the base path is occupied by a file.
//! - **`write_string_to_file`**: Writes a string slice (`&str`) to the specified file path. Before writing, it ensures the parent directory of the target file exists by calling `ensure_dir_exists`. It overwrites the file if it already exists.
//!
//! These functions aim to simplify common I/O patterns and provide
//! consistent error handling with helpful context messages.
//!
//! ## Usage
//!
//! These utilities are broadly used, for example:
//! - `StudyArchive::new` and `Group` construction use `ensure_dir_exists` for the eager staging layout.
//! - `ContentContainer::dump_contents` uses `write_string_to_file` for the `Data.csv` table.
//!
//! ```ignore
//! use crate::common::fs::io;
//!
//! io::ensure_dir_exists(staging_dir)?;
//! io::write_string_to_file(&staging_dir.join("Data.csv"), &table_text)?;
//! ```
//!
use crate::core::error::{Result, StudyArchError}; // Use standard Result and custom Error types
use anyhow::Context; // For adding context to errors
use std::fs; // Standard filesystem module
use std::path::Path; // Filesystem path type
use tracing::{debug, info}; // Logging utilities

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function attempts to create the directory,
/// including any necessary parent directories (similar to `mkdir -p`).
/// If the path already exists but is not a directory (e.g., it's a file),
/// an error (`StudyArchError::FileSystem`) is returned.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the directory path to ensure exists.
///
/// # Returns
///
/// * `Result<()>` - Returns `Ok(())` if the directory exists or was successfully created.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    // Check if the path exists in the filesystem.
    if !path.exists() {
        // Path does not exist, attempt to create it recursively.
        fs::create_dir_all(path)
            // Add context to any error occurring during directory creation.
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        // Log the successful creation.
        info!("Created directory: {:?}", path);
    }
    // Path exists, check if it's actually a directory.
    else if !path.is_dir() {
        // It exists but is not a directory (e.g., a file). Return an error.
        // Use anyhow::bail! for a concise error return, wrapping our custom error type.
        anyhow::bail!(StudyArchError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    // Path exists and is already a directory.
    else {
        // Log that no action was needed (debug level).
        debug!("Directory already exists: {:?}", path);
    }
    // If we reach here, the directory exists (either pre-existing or newly created).
    Ok(())
}

/// Writes string content to a specified file path, overwriting if it exists.
///
/// This function first ensures that the parent directory of the target `path` exists,
/// creating it recursively if necessary using `ensure_dir_exists`. It then writes
/// the provided `content` string slice to the file. If the file already exists,
/// its contents will be replaced.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the target file path.
/// * `content` - A `&str` slice containing the content to write to the file.
///
/// # Returns
///
/// * `Result<()>` - Returns `Ok(())` if the file was successfully written.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The parent directory cannot be created.
/// - Writing to the file fails (e.g., permissions, I/O error).
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    // --- Ensure Parent Directory Exists ---
    // Get the parent directory of the target file path.
    if let Some(parent) = path.parent() {
        // If a parent exists, ensure it's a directory (creates if needed).
        ensure_dir_exists(parent)?; // Propagate error if directory creation fails.
    }
    // If `path.parent()` returns None, it means the path is likely a root path
    // (e.g., "/" or "C:\"), which should already exist.

    // --- Write File Content ---
    // Attempt to write the string content to the file.
    fs::write(path, content)
        // Add context to any error during writing.
        .with_context(|| format!("Failed to write to file {:?}", path))?;
    // Log the successful write operation.
    info!("Wrote content to file: {:?}", path);
    Ok(()) // Indicate success.
}

// --- Unit Tests ---
// Tests for the filesystem I/O utilities.
#[cfg(test)]
mod tests {
    use super::*; // Import items from the parent module (io.rs).
    use tempfile::tempdir; // Create temporary directories for isolated testing.

    /// Test `ensure_dir_exists` when the directory needs to be created, including parents.
    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        // Setup: Create a temporary base directory.
        let base_dir = tempdir()?;
        // Define a path for a new directory structure *within* the base directory.
        let new_dir = base_dir.path().join("zip_directory/Archive/Groups");
        // Assert: Ensure the target directory does not exist initially.
        assert!(!new_dir.exists());
        // Action: Call the function to ensure the directory exists.
        ensure_dir_exists(&new_dir)?;
        // Assert: Verify the directory now exists and is actually a directory.
        assert!(new_dir.is_dir());
        Ok(()) // Test passes.
    }

    /// Test `ensure_dir_exists` when the directory already exists.
    #[test]
    fn test_ensure_dir_exists_already_exists() -> Result<()> {
        // Setup: Create a temporary base directory.
        let base_dir = tempdir()?;
        // Define a path within the base directory.
        let existing_dir = base_dir.path().join("existing");
        // Manually create the directory beforehand.
        fs::create_dir(&existing_dir)?;
        // Action: Call the function on the existing directory.
        ensure_dir_exists(&existing_dir)?; // Should be a no-op and succeed.
        // Assert: Verify the directory still exists and is a directory.
        assert!(existing_dir.is_dir());
        Ok(()) // Test passes.
    }

    /// Test `ensure_dir_exists` when the target path exists but is a file.
    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        // Setup: Create a temporary base directory.
        let base_dir = tempdir()?;
        // Define a path and create a *file* at that path.
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        // Action: Call the function trying to ensure this path is a directory.
        let result = ensure_dir_exists(&file_path);
        // Assert: Expect an error because the path exists but is not a directory.
        assert!(result.is_err());
        // Assert: Check the error message content for correctness.
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(()) // Test passes (error was expected).
    }

    /// Test writing a file whose parent directory does not exist yet.
    #[test]
    fn test_write_string_to_file_creates_parent() -> Result<()> {
        // Setup: Create a temporary base directory.
        let base_dir = tempdir()?;
        // Define the path for the test file under a not-yet-existing parent.
        let file_path = base_dir.path().join("Groups/deck1/Data.csv");
        let content = "1 Text,1 Image,1 Audio\nhello,,\n"; // Content to write.
        // Action: Write the string content to the file.
        write_string_to_file(&file_path, content)?;
        // Assert: Verify the file was created with the expected content.
        assert!(file_path.exists());
        assert_eq!(fs::read_to_string(&file_path)?, content);
        Ok(()) // Test passes.
    }

    /// Test that an existing file is overwritten, not appended to.
    #[test]
    fn test_write_string_to_file_overwrites() -> Result<()> {
        // Setup: Create a temporary base directory and an existing file.
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("Data.csv");
        write_string_to_file(&file_path, "old")?;
        // Action: Write new content to the same path.
        write_string_to_file(&file_path, "new")?;
        // Assert: The file holds only the new content.
        assert_eq!(fs::read_to_string(&file_path)?, "new");
        Ok(()) // Test passes.
    }
}
