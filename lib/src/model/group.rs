//! # StudyArch Group Tree
//!
//! File: lib/src/model/group.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! This module defines `Group`: a named content container that owns an
//! ordered tree of child groups, each backed by its own staging
//! subdirectory. The on-disk tree mirrors the group tree exactly — every
//! child lives under its parent's groups directory.
//!
//! ## Architecture
//!
//! - A group's staging directory is created eagerly at construction time;
//!   directory existence always precedes any writes.
//! - `add_group` nests a child at `<this dir>/Groups/<name>` (the groups
//!   directory name comes from the archive settings), appends it to the
//!   child list, and hands back a mutable reference for further population.
//!   Duplicate sibling names are rejected rather than silently colliding on
//!   disk.
//! - `dump` writes the group's own table and media first, then recurses
//!   into the children in insertion order (pre-order traversal).
//!
//! ## Usage
//!
//! Groups are created through `StudyArchive::add_group` (or a parent
//! group's `add_group`), never directly.
//!
//! ```ignore
//! let deck = arch.add_group("deck1")?;
//! deck.add_content(vec![Facet::new().with_text("hello")]);
//! let subdeck = deck.add_group("unit1")?;
//! subdeck.add_content(vec![Facet::new().with_text("nested")]);
//! ```
//!
use crate::common::fs::io;
use crate::core::config::{self, ArchiveSettings};
use crate::core::error::{Result, StudyArchError};
use crate::model::container::{ContentContainer, ContentEntry};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A named, nestable collection of content entries with its own on-disk
/// staging subtree.
#[derive(Debug)]
pub struct Group {
    /// The group's name; doubles as its path segment under the parent's
    /// groups directory.
    name: String,
    /// The group's staging directory (created eagerly at construction).
    directory: PathBuf,
    /// Layout names inherited from the owning archive.
    settings: ArchiveSettings,
    /// The group's own content entries.
    container: ContentContainer,
    /// Child groups in insertion order (exclusive ownership, tree shape).
    groups: Vec<Group>,
}

impl Group {
    /// Creates a group backed by `directory`, eagerly creating the
    /// directory (and any missing parents). Otherwise inert at
    /// construction.
    pub(crate) fn new(
        name: impl Into<String>,
        directory: PathBuf,
        settings: ArchiveSettings,
    ) -> Result<Self> {
        let name = name.into();
        // Directory existence precedes any writes — create it now.
        io::ensure_dir_exists(&directory)?;
        debug!("Created group '{}' at {:?}", name, directory);
        Ok(Self {
            name,
            directory,
            settings,
            container: ContentContainer::new(),
            groups: Vec::new(),
        })
    }

    /// The group's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The group's staging directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Appends one content entry to the group's own container.
    pub fn add_content(&mut self, entry: impl Into<ContentEntry>) {
        self.container.add_content(entry);
    }

    /// Creates a child group nested under this group's groups directory and
    /// returns a mutable handle to it for further population (supports
    /// arbitrary nesting depth via chained calls).
    ///
    /// # Errors
    ///
    /// Returns an `Err` if the name is empty or contains a path separator,
    /// if a sibling with the same name already exists
    /// (`StudyArchError::GroupNameConflict`), or if the child's staging
    /// directory cannot be created.
    pub fn add_group(&mut self, name: &str) -> Result<&mut Group> {
        let groups_dir = self.directory.join(&self.settings.groups_dir_name);
        attach_child(&mut self.groups, &groups_dir, name, &self.settings)
    }

    /// Dumps this group's container into its own directory, then
    /// recursively dumps every child group in insertion order (pre-order,
    /// self before children).
    pub fn dump(&self) -> Result<()> {
        self.container
            .dump_contents(&self.directory, &self.settings.data_file_name)?;
        for group in &self.groups {
            group.dump()?;
        }
        Ok(())
    }
}

/// Attaches a new child group under `groups_dir`, enforcing unique sibling
/// names. Shared by `Group::add_group` and `StudyArchive::add_group`, whose
/// contracts are identical apart from the root directory.
pub(crate) fn attach_child<'a>(
    children: &'a mut Vec<Group>,
    groups_dir: &Path,
    name: &str,
    settings: &ArchiveSettings,
) -> Result<&'a mut Group> {
    // A group name becomes a path segment; reject shapes that would change
    // the staged tree.
    config::validate_segment("group name", name)?;
    // Reject duplicate siblings instead of letting them collide on disk
    // (last-writer-wins would silently merge two groups' content).
    if children.iter().any(|group| group.name == name) {
        anyhow::bail!(StudyArchError::GroupNameConflict {
            name: name.to_string(),
        });
    }
    let directory = groups_dir.join(name);
    let group = Group::new(name, directory, settings.clone())?;
    let index = children.len();
    children.push(group);
    Ok(&mut children[index])
}
