//! # StudyArch Shared Utilities (`common`)
//!
//! File: lib/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! This module serves as the central hub for shared utility functions used
//! by the archive model. It groups related functionality into specialized
//! submodules so the model code stays focused on tree semantics while the
//! mechanics of filesystem access, table encoding, and packaging live here.
//!
//! ## Architecture
//!
//! Functionality is delegated to the following submodules:
//!
//! - **`archive`**: Packs the staged directory tree into the final zip container.
//! - **`fs`**: Filesystem operations (ensuring directories exist, writing
//!   staged files, flat-copying referenced media).
//! - **`table`**: Tabular (CSV) encoding of container rows.
//!
//! ## Usage
//!
//! Model code imports the specific submodule needed:
//!
//! ```ignore
//! use crate::common::{archive, fs, table};
//!
//! fs::io::ensure_dir_exists(staging_dir)?;
//! let row = table::csv::encode_row(&cells);
//! archive::zip::zip_directory_contents(staging_dir, &zip_path)?;
//! ```
//!
//! This modular approach keeps the utility codebase organized and maintainable.
//!

/// Utilities for packing the staged tree into the final zip container.
pub mod archive;
/// Utilities for filesystem operations (directory creation, writes, flat copies).
pub mod fs;
/// Utilities for tabular (CSV) encoding of container rows.
pub mod table;
