//! # StudyArch Archive Root
//!
//! File: lib/src/model/archive.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! This module defines `StudyArchive`, the root of the archive tree. It
//! owns the base directory, manages the staging layout, holds the top-level
//! content container and groups, and performs the final compression and
//! renaming step that produces the `.studyarch` artifact.
//!
//! ## Architecture
//!
//! Construction validates the base path (a path occupied by a file is a
//! hard error) and eagerly creates the staging layout:
//!
//! ```text
//! base_directory/
//!   zip_directory/          <- compressed as the artifact root
//!     Archive/              <- top-level Data.csv + media
//!       Groups/             <- one subtree per top-level group
//! ```
//!
//! `dump()` then runs the whole pipeline in order: top-level container,
//! every group pre-order, zip the staging directory's contents into
//! `arch.zip`, rename to `arch.studyarch`. All steps are synchronous and
//! attempted exactly once; a failure aborts the dump and leaves any
//! partially staged or partially compressed files on disk.
//!
//! ## Usage
//!
//! ```ignore
//! let mut arch = StudyArchive::new("out")?;
//! arch.add_content(vec![Facet::new().with_text("hello")]);
//! arch.add_group("deck1")?.add_content(vec![Facet::new().with_text("bonjour")]);
//! let artifact = arch.dump()?; // out/arch.studyarch
//! ```
//!
use crate::common::archive::zip;
use crate::common::fs::io;
use crate::core::config::ArchiveSettings;
use crate::core::error::Result;
use crate::model::container::{ContentContainer, ContentEntry};
use crate::model::group::{self, Group};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// The root of a study archive: staging layout, top-level content, and the
/// group tree, plus the final packaging step.
#[derive(Debug)]
pub struct StudyArchive {
    /// Directory the artifact is written into; also holds the staging tree.
    base_directory: PathBuf,
    /// `base/zip_directory` — its *contents* become the artifact root.
    staging_directory: PathBuf,
    /// `base/zip_directory/Archive` — the top-level container's directory.
    content_directory: PathBuf,
    /// `base/zip_directory/Archive/Groups` — root of the group subtrees.
    groups_directory: PathBuf,
    /// Layout names (canonical defaults unless overridden).
    settings: ArchiveSettings,
    /// Top-level content entries (staged directly under `Archive/`).
    container: ContentContainer,
    /// Top-level groups in insertion order.
    groups: Vec<Group>,
}

impl StudyArchive {
    /// Creates an archive rooted at `base_directory` with the canonical
    /// `.studyarch` layout.
    ///
    /// The base directory is created if absent. Construction fails fast if
    /// the path exists and is not a directory (a configuration error, not a
    /// silent pass-through). The staging layout
    /// `base/zip_directory/Archive/Groups/` is created eagerly with all
    /// intermediate directories.
    ///
    /// # Arguments
    ///
    /// * `base_directory` - Where the staging tree and the final artifact live.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if the base path is occupied by a non-directory or
    /// any staging directory cannot be created.
    pub fn new(base_directory: impl Into<PathBuf>) -> Result<Self> {
        Self::with_settings(base_directory, ArchiveSettings::default())
    }

    /// Creates an archive with explicit layout settings (see
    /// `core::config::load_settings` for loading them from a TOML file).
    ///
    /// Settings are validated before any directory is touched.
    pub fn with_settings(
        base_directory: impl Into<PathBuf>,
        settings: ArchiveSettings,
    ) -> Result<Self> {
        // Reject malformed layout names before creating anything.
        settings.validate()?;

        let base_directory = base_directory.into();
        // Fail fast when the base path exists but is not a directory.
        io::ensure_dir_exists(&base_directory)?;

        // Derive the staging layout from the settings and create it eagerly
        // (ensure_dir_exists creates all intermediates).
        let staging_directory = base_directory.join(&settings.staging_dir_name);
        let content_directory = staging_directory.join(&settings.content_dir_name);
        let groups_directory = content_directory.join(&settings.groups_dir_name);
        io::ensure_dir_exists(&groups_directory)?;

        info!(
            "Initialized study archive at {:?} (staging in {:?})",
            base_directory, staging_directory
        );
        Ok(Self {
            base_directory,
            staging_directory,
            content_directory,
            groups_directory,
            settings,
            container: ContentContainer::new(),
            groups: Vec::new(),
        })
    }

    /// The directory the final artifact is written into.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// The path the final artifact will be written to by `dump()`.
    pub fn artifact_path(&self) -> PathBuf {
        self.base_directory.join(format!(
            "{}.{}",
            self.settings.artifact_stem, self.settings.artifact_extension
        ))
    }

    /// Appends one content entry to the archive's top-level container
    /// (staged directly under `Archive/` in the artifact).
    pub fn add_content(&mut self, entry: impl Into<ContentEntry>) {
        self.container.add_content(entry);
    }

    /// Creates a top-level group rooted under the archive's groups
    /// directory and returns a mutable handle to it. Same contract as
    /// `Group::add_group`: insertion order is preserved and duplicate
    /// sibling names are rejected.
    pub fn add_group(&mut self, name: &str) -> Result<&mut Group> {
        group::attach_child(&mut self.groups, &self.groups_directory, name, &self.settings)
    }

    /// Dumps the whole archive and produces the final artifact.
    ///
    /// Pipeline, in order:
    /// 1. Dump the top-level container into the archive-content directory.
    /// 2. Recursively dump every top-level group (pre-order, insertion order).
    /// 3. Compress the staging directory's contents into `<stem>.zip` in
    ///    the base directory.
    /// 4. Rename the zip to `<stem>.<extension>` (canonically
    ///    `arch.studyarch`).
    ///
    /// The stored entries are never mutated, so `dump()` may be called
    /// again; staged files and the artifact are simply rewritten.
    ///
    /// # Returns
    ///
    /// * `Result<PathBuf>` - The path of the final artifact.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if any table write, media copy, compression step,
    /// or the final rename fails. No cleanup is attempted; a partially
    /// written zip is left on disk.
    pub fn dump(&self) -> Result<PathBuf> {
        // (1) Top-level content lands directly in the content directory.
        self.container
            .dump_contents(&self.content_directory, &self.settings.data_file_name)?;

        // (2) Every group subtree, pre-order.
        for group in &self.groups {
            group.dump()?;
        }

        // (3) Pack the staged tree. The zip's root is the staging
        // directory's contents, so the artifact opens straight into Archive/.
        let zip_path = self
            .base_directory
            .join(format!("{}.zip", self.settings.artifact_stem));
        zip::zip_directory_contents(&self.staging_directory, &zip_path)?;

        // (4) Rename to the custom extension; this is what makes the file a
        // .studyarch artifact rather than a plain zip.
        let artifact = self.artifact_path();
        fs::rename(&zip_path, &artifact).with_context(|| {
            format!(
                "Failed to rename archive {:?} to {:?}",
                zip_path, artifact
            )
        })?;

        info!("Wrote study archive artifact: {:?}", artifact);
        Ok(artifact)
    }
}
