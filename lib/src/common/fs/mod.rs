//! # StudyArch Filesystem Utilities (`common::fs`)
//!
//! File: lib/src/common/fs/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! This module acts as the primary interface for all filesystem-related
//! utility functions within the StudyArch library. It aggregates
//! functionality from specialized submodules, providing a consistent entry
//! point for staging-directory creation, staged-file writes, and media
//! copies.
//!
//! ## Architecture
//!
//! Functionality is delegated to the following submodules:
//!
//! - **`copy`**: Flat single-file copies of referenced media into a container
//!   directory. Used by `ContentContainer::dump_contents`.
//! - **`io`**: Basic operations like ensuring directories exist
//!   (`ensure_dir_exists`) and writing strings to files
//!   (`write_string_to_file`). Used by every model type.
//!
//! ## Usage
//!
//! Other parts of the crate import the specific submodule needed.
//!
//! ```ignore
//! use crate::common::fs::{copy, io};
//!
//! io::ensure_dir_exists(group_dir)?;
//! let base_name = copy::copy_file_flat(media_path, group_dir)?;
//! io::write_string_to_file(&group_dir.join("Data.csv"), &table)?;
//! ```
//!

/// Contains the flat media-copy operation (`copy_file_flat`).
pub mod copy;
/// Contains basic file I/O operations (e.g., `ensure_dir_exists`, `write_string_to_file`).
pub mod io;
