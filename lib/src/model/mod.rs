//! # StudyArch Data Model (`model`)
//!
//! File: lib/src/model/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! This module contains the archive data model: the in-memory tree the
//! caller builds up before a single `dump()` call stages and packages it.
//! Three collaborating concepts live here, mirroring the archive format
//! itself.
//!
//! ## Architecture
//!
//! - **`container`**: `Facet`, `ContentEntry`, and `ContentContainer` — the
//!   ordered entry list every node owns, plus its serialization to a
//!   `Data.csv` table and the flat media copies that accompany it.
//! - **`group`**: `Group` — a named container with its own staging
//!   subdirectory and an ordered tree of child groups.
//! - **`archive`**: `StudyArchive` — the tree root; owns the staging layout
//!   and performs final compression and renaming into the `.studyarch`
//!   artifact.
//!
//! Ownership is strictly tree-shaped: groups are owned exclusively by their
//! parent, so there are no cycles and no shared mutation.
//!
//! ## Usage
//!
//! The model types are re-exported at the crate root:
//!
//! ```ignore
//! use studyarch::{ContentEntry, Facet, StudyArchive};
//!
//! let mut arch = StudyArchive::new("out")?;
//! let deck = arch.add_group("deck1")?;
//! deck.add_content(ContentEntry::from(vec![Facet::new().with_text("hello")]));
//! arch.dump()?;
//! ```
//!

/// Contains the `StudyArchive` root type and final packaging.
pub mod archive;
/// Contains `Facet`, `ContentEntry`, and `ContentContainer`.
pub mod container;
/// Contains the nestable `Group` type.
pub mod group;
