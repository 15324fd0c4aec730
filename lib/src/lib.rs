//! # StudyArch Library Entry Point
//!
//! File: lib/src/lib.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! StudyArch builds hierarchical "study archive" files: a tree of named
//! groups, each holding a list of flashcard-like content entries (text /
//! image / audio facets). Entries are serialized to tabular `Data.csv`
//! files, referenced media is copied alongside them, and the whole staged
//! tree is packed into a single compressed `.studyarch` file (a standard
//! zip container with a custom extension).
//!
//! ## Architecture
//!
//! The crate follows a modular structure:
//! - `core`: Infrastructure (error types, archive layout settings)
//! - `common`: Shared utilities (filesystem I/O, flat file copy, CSV
//!   encoding, zip packaging)
//! - `model`: The archive data model (facets, entries, containers, groups,
//!   and the `StudyArchive` root)
//!
//! All errors are propagated to the caller as `anyhow::Result` values with
//! context attached at each filesystem boundary.
//!
//! ## Examples
//!
//! Building and dumping a small archive:
//!
//! ```no_run
//! use studyarch::{ContentEntry, Facet, Result, StudyArchive};
//!
//! fn main() -> Result<()> {
//!     let mut arch = StudyArchive::new("out")?;
//!
//!     // Top-level content lives directly under Archive/ in the artifact.
//!     arch.add_content(ContentEntry::from(vec![Facet::new().with_text("hello")]));
//!
//!     // Groups nest arbitrarily; each gets its own Data.csv and media.
//!     let deck = arch.add_group("deck1")?;
//!     deck.add_content(ContentEntry::from(vec![
//!         Facet::new().with_text("bonjour").with_audio("clips/bonjour.mp3"),
//!     ]));
//!
//!     // Stages every container to disk, zips the tree, and renames the
//!     // result to out/arch.studyarch.
//!     let artifact = arch.dump()?;
//!     println!("Wrote {}", artifact.display());
//!     Ok(())
//! }
//! ```
//!

// Declare the top-level modules of the library crate.
pub mod common; // Contains shared utilities (fs, table, archive packaging).
pub mod core; // Core infrastructure (errors, settings).
pub mod model; // The archive data model (facets, containers, groups, archive).

// Re-export the public surface at the crate root for convenience, so callers
// can write `studyarch::StudyArchive` instead of `studyarch::model::archive::StudyArchive`.
pub use crate::core::config::ArchiveSettings;
pub use crate::core::error::{Result, StudyArchError};
pub use crate::model::archive::StudyArchive;
pub use crate::model::container::{ContentContainer, ContentEntry, Facet};
pub use crate::model::group::Group;
