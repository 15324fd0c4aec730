//! # StudyArch Archive Utilities (`common::archive`)
//!
//! File: lib/src/common/archive/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! This module provides the packaging step of the archive pipeline: once the
//! group tree has been dumped into the staging directory, its contents are
//! compressed into a single zip container which, after renaming, becomes the
//! final `.studyarch` artifact.
//!
//! ## Architecture
//!
//! Functionality is delegated to the following submodule:
//!
//! - **`zip`**: Walks a staged directory tree and writes its contents into a
//!   deflate-compressed zip file. The zip root corresponds to the staging
//!   directory's *contents* (not the staging directory itself), so the
//!   artifact opens straight into `Archive/`.
//!
//! ## Usage
//!
//! Used by `StudyArchive::dump` as the final packaging step.
//!
//! ```ignore
//! use crate::common::archive::zip;
//!
//! zip::zip_directory_contents(staging_dir, &base_dir.join("arch.zip"))?;
//! ```
//!

/// Utilities for writing the staged tree into a zip container.
pub mod zip;
