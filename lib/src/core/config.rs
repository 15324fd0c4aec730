//! # StudyArch Settings System
//!
//! File: lib/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! This module implements the settings system for StudyArch, handling
//! loading, validation, and access to the archive layout names. The layout
//! names control every path segment the builder stages on disk and the name
//! of the final artifact.
//!
//! ## Architecture
//!
//! The settings system follows these principles:
//! - Canonical layout names are the defaults; a settings file only needs to
//!   mention the names it overrides
//! - Settings are validated for correctness before use (no empty names, no
//!   path separators smuggled into a single path segment)
//! - Structured data models ensure type safety
//!
//! The canonical layout (all defaults) stages:
//!
//! ```text
//! base_directory/
//!   zip_directory/            <- staging_dir_name
//!     Archive/                <- content_dir_name
//!       Data.csv              <- data_file_name
//!       Groups/               <- groups_dir_name
//! ```
//!
//! and produces `base_directory/arch.studyarch` (artifact_stem "." artifact_extension).
//!
//! ## Examples
//!
//! Loading and using settings:
//!
//! ```ignore
//! let settings = config::load_settings(Path::new("studyarch.toml"))?;
//!
//! // Or just take the canonical layout.
//! let settings = ArchiveSettings::default();
//! assert_eq!(settings.data_file_name, "Data.csv");
//! ```
//!
//! The settings are captured once at `StudyArchive` construction and reused
//! for every staged path.
//!
use crate::core::error::{Result, StudyArchError};
use anyhow::Context;
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{debug, info};

/// Represents the archive layout settings, loadable from a TOML file.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in the TOML
pub struct ArchiveSettings {
    /// Name of the staging directory created under the base directory.
    /// Its *contents* become the root of the zip artifact.
    #[serde(default = "default_staging_dir_name")]
    pub staging_dir_name: String,
    /// Name of the archive-content directory inside the staging directory.
    #[serde(default = "default_content_dir_name")]
    pub content_dir_name: String,
    /// Name of the child-group directory created under the archive content
    /// directory and under every group directory that has children.
    #[serde(default = "default_groups_dir_name")]
    pub groups_dir_name: String,
    /// Name of the tabular data file written into each container directory.
    #[serde(default = "default_data_file_name")]
    pub data_file_name: String,
    /// File stem of the artifact written into the base directory.
    #[serde(default = "default_artifact_stem")]
    pub artifact_stem: String,
    /// Extension of the final artifact (the renamed zip container).
    #[serde(default = "default_artifact_extension")]
    pub artifact_extension: String,
}

// --- Default value functions ---
// Each mirrors one canonical layout name so a settings file can override
// names individually.
fn default_staging_dir_name() -> String {
    "zip_directory".to_string()
}
fn default_content_dir_name() -> String {
    "Archive".to_string()
}
fn default_groups_dir_name() -> String {
    "Groups".to_string()
}
fn default_data_file_name() -> String {
    "Data.csv".to_string()
}
fn default_artifact_stem() -> String {
    "arch".to_string()
}
fn default_artifact_extension() -> String {
    "studyarch".to_string()
}

impl Default for ArchiveSettings {
    /// The canonical `.studyarch` layout.
    fn default() -> Self {
        Self {
            staging_dir_name: default_staging_dir_name(),
            content_dir_name: default_content_dir_name(),
            groups_dir_name: default_groups_dir_name(),
            data_file_name: default_data_file_name(),
            artifact_stem: default_artifact_stem(),
            artifact_extension: default_artifact_extension(),
        }
    }
}

impl ArchiveSettings {
    /// Validates every layout name for use as a single path segment.
    ///
    /// # Errors
    ///
    /// Returns a `StudyArchError::Config` if any name is empty or contains a
    /// path separator (which would silently change the staged tree shape).
    pub fn validate(&self) -> Result<()> {
        validate_segment("staging_dir_name", &self.staging_dir_name)?;
        validate_segment("content_dir_name", &self.content_dir_name)?;
        validate_segment("groups_dir_name", &self.groups_dir_name)?;
        validate_segment("data_file_name", &self.data_file_name)?;
        validate_segment("artifact_stem", &self.artifact_stem)?;
        validate_segment("artifact_extension", &self.artifact_extension)?;
        debug!("Archive settings validated: {:?}", self);
        Ok(())
    }
}

/// Checks a single layout name: non-empty, no path separators.
///
/// Also used by the model to validate group names, which become path
/// segments under a parent's groups directory.
pub(crate) fn validate_segment(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        anyhow::bail!(StudyArchError::Config(format!(
            "{} must not be empty",
            field
        )));
    }
    if value.contains('/') || value.contains('\\') {
        anyhow::bail!(StudyArchError::Config(format!(
            "{} must be a single path segment, got: {}",
            field, value
        )));
    }
    Ok(())
}

/// Loads archive layout settings from a TOML file and validates them.
///
/// Any name absent from the file keeps its canonical default.
///
/// # Arguments
///
/// * `path` - A `&Path` to the TOML settings file. Must exist.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be read, is not valid TOML for
/// `ArchiveSettings`, or fails validation.
pub fn load_settings(path: &Path) -> Result<ArchiveSettings> {
    info!("Loading archive settings from: {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    let settings: ArchiveSettings = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    settings
        .validate()
        .context("Archive settings validation failed")?;
    Ok(settings)
}
