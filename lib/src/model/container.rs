//! # StudyArch Content Container
//!
//! File: lib/src/model/container.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! This module defines the heart of the data model: typed facets, the
//! content entries they form, and the `ContentContainer` that serializes an
//! ordered entry list into a tabular `Data.csv` file while flat-copying
//! every referenced media file alongside it.
//!
//! ## Architecture
//!
//! - **`Facet`**: one sub-entry of a flashcard, with optional `text`,
//!   `image`, and `audio` fields. The typed struct replaces the untyped
//!   key-value bags of earlier archive tooling, so illegal facet keys are
//!   unrepresentable.
//! - **`ContentEntry`**: an ordered sequence of facets representing one
//!   study item (one table row).
//! - **`ContentContainer`**: an ordered sequence of entries (insertion
//!   order = output row order). `dump_contents` projects the entries into a
//!   table without mutating them, so repeated dumps are idempotent.
//!
//! The table scheme: for the maximum facet count F across all entries, the
//! header carries 3×F columns `"{i} Text"`, `"{i} Image"`, `"{i} Audio"`
//! for i in 1..=F, grouped by facet index. Media cells record only the base
//! file name of the staged copy, which lives next to the table.
//!
//! ## Usage
//!
//! Containers are embedded in `Group` and `StudyArchive`; callers interact
//! with them through those types.
//!
//! ```ignore
//! let mut container = ContentContainer::new();
//! container.add_content(vec![
//!     Facet::new().with_text("bonjour").with_audio("clips/bonjour.mp3"),
//!     Facet::new().with_text("hello"),
//! ]);
//! container.dump_contents(group_dir, "Data.csv")?;
//! ```
//!
use crate::common::fs::{copy, io};
use crate::common::table::csv;
use crate::core::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One sub-entry of a content entry: optional text plus optional references
/// to an image file and an audio file on the caller's filesystem.
///
/// Media paths are read at dump time; until then the facet merely records
/// where the file lives. Absent fields serialize to empty table cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facet {
    /// The text shown on this facet, if any.
    pub text: Option<String>,
    /// Path to an image file to copy into the container directory, if any.
    pub image: Option<PathBuf>,
    /// Path to an audio file to copy into the container directory, if any.
    pub audio: Option<PathBuf>,
}

impl Facet {
    /// Creates an empty facet (all fields absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text value (builder style).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the image path (builder style).
    pub fn with_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image = Some(path.into());
        self
    }

    /// Sets the audio path (builder style).
    pub fn with_audio(mut self, path: impl Into<PathBuf>) -> Self {
        self.audio = Some(path.into());
        self
    }
}

/// An ordered sequence of facets representing one study item.
///
/// Entries are opaque to the container: no schema beyond the typed facet
/// fields is enforced at insertion time, and entries with differing facet
/// counts simply produce sparse rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentEntry {
    facets: Vec<Facet>,
}

impl ContentEntry {
    /// Creates an entry with no facets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a facet to the entry (order = column group order).
    pub fn push_facet(&mut self, facet: Facet) {
        self.facets.push(facet);
    }

    /// The entry's facets in insertion order.
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }
}

/// Builds an entry directly from a facet list, the most common call shape.
impl From<Vec<Facet>> for ContentEntry {
    fn from(facets: Vec<Facet>) -> Self {
        Self { facets }
    }
}

/// An ordered list of content entries plus their tabular serialization.
///
/// Both `Group` and `StudyArchive` embed one of these; insertion order is
/// output row order. The container never touches the filesystem until
/// `dump_contents` is called.
#[derive(Debug, Clone, Default)]
pub struct ContentContainer {
    entries: Vec<ContentEntry>,
}

impl ContentContainer {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry to the container.
    ///
    /// No validation is performed; an entry with zero facets simply yields
    /// an all-empty row, and differing facet counts yield sparse columns.
    pub fn add_content(&mut self, entry: impl Into<ContentEntry>) {
        self.entries.push(entry.into());
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the container holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dumps the container's entries into the given directory.
    ///
    /// Writes the tabular file named `data_file_name` inside `directory`
    /// and flat-copies every referenced media file into that directory. The
    /// recorded cell value for a media facet is the base file name, which
    /// is valid relative to the container's own directory.
    ///
    /// This is a pure projection: the stored entries are never modified, so
    /// calling `dump_contents` again re-copies media from the original
    /// source paths and rewrites the same table.
    ///
    /// A container with zero entries emits no file at all.
    ///
    /// # Arguments
    ///
    /// * `directory` - The container's staging directory. Must exist.
    /// * `data_file_name` - Name of the table file (canonically `Data.csv`).
    ///
    /// # Errors
    ///
    /// Returns an `Err` if any media copy fails (missing source, unwritable
    /// destination) or the table cannot be written. A failed copy aborts the
    /// whole dump; there is no partial-row recovery.
    pub fn dump_contents(&self, directory: &Path, data_file_name: &str) -> Result<()> {
        // Zero entries: emit nothing, not even an empty table.
        if self.entries.is_empty() {
            debug!("Container is empty, skipping {:?}", directory);
            return Ok(());
        }

        // --- Media Copy Phase ---
        // Resource type is the outer iteration key: every audio facet across
        // all entries is staged first, then every image facet. This keeps
        // the copy (and therefore failure) order stable across dumps.
        self.copy_resources(directory, ResourceKind::Audio)?;
        self.copy_resources(directory, ResourceKind::Image)?;

        // --- Table Projection Phase ---
        // The widest entry determines the column count: 3 columns per facet.
        let facet_count = self
            .entries
            .iter()
            .map(|entry| entry.facets.len())
            .max()
            .unwrap_or(0);

        // Header row: "1 Text","1 Image","1 Audio","2 Text",... grouped by
        // facet index (1-based).
        let mut header = Vec::with_capacity(facet_count * 3);
        for i in 1..=facet_count {
            header.push(format!("{} Text", i));
            header.push(format!("{} Image", i));
            header.push(format!("{} Audio", i));
        }

        let mut table = csv::encode_row(&header);
        for entry in &self.entries {
            table.push_str(&csv::encode_row(&project_row(entry, facet_count)?));
        }

        // Write the finished table next to the staged media.
        let table_path = directory.join(data_file_name);
        io::write_string_to_file(&table_path, &table)?;
        info!(
            "Dumped {} entries ({} facet columns) to {:?}",
            self.entries.len(),
            facet_count * 3,
            table_path
        );
        Ok(())
    }

    /// Copies one resource type (audio or image) for every facet of every
    /// entry into `directory`, in entry then facet order.
    fn copy_resources(&self, directory: &Path, kind: ResourceKind) -> Result<()> {
        for entry in &self.entries {
            for facet in &entry.facets {
                let path = match kind {
                    ResourceKind::Audio => facet.audio.as_deref(),
                    ResourceKind::Image => facet.image.as_deref(),
                };
                if let Some(path) = path {
                    // The returned base name is recomputed during row
                    // projection; here only the staged copy matters.
                    copy::copy_file_flat(path, directory)?;
                }
            }
        }
        Ok(())
    }
}

/// The media resource types a facet can reference, in their staging order.
#[derive(Debug, Clone, Copy)]
enum ResourceKind {
    Audio,
    Image,
}

/// Projects one entry into its table row: three cells per facet, padded
/// with empty cells up to the container-wide facet count.
///
/// Media cells record the base file name of the staged copy. The entry
/// itself is left untouched.
fn project_row(entry: &ContentEntry, facet_count: usize) -> Result<Vec<String>> {
    let mut row = Vec::with_capacity(facet_count * 3);
    for facet in &entry.facets {
        row.push(facet.text.clone().unwrap_or_default());
        row.push(base_name_cell(facet.image.as_deref())?);
        row.push(base_name_cell(facet.audio.as_deref())?);
    }
    // Entries with fewer facets than the widest leave their trailing
    // columns empty.
    row.resize(facet_count * 3, String::new());
    Ok(row)
}

/// The cell value for a media path: its base file name, or an empty cell
/// when the facet has no such resource.
fn base_name_cell(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => {
            let name = p.file_name().ok_or_else(|| {
                crate::core::error::StudyArchError::FileSystem(format!(
                    "Media path has no file name: {:?}",
                    p
                ))
            })?;
            Ok(name.to_string_lossy().into_owned())
        }
        None => Ok(String::new()),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// A container with zero entries must not emit a table file.
    #[test]
    fn test_dump_contents_empty_container_emits_nothing() -> Result<()> {
        // Setup: An empty container and a staging directory.
        let dir = tempdir()?;
        let container = ContentContainer::new();
        // Action: Dump.
        container.dump_contents(dir.path(), "Data.csv")?;
        // Assert: No Data.csv was written.
        assert!(!dir.path().join("Data.csv").exists());
        Ok(())
    }

    /// A text-only facet round-trips into the `{i} Text` cell with empty
    /// image/audio cells.
    #[test]
    fn test_dump_contents_text_only_entry() -> Result<()> {
        // Setup: One entry with a single text facet.
        let dir = tempdir()?;
        let mut container = ContentContainer::new();
        container.add_content(vec![Facet::new().with_text("hello")]);
        // Action: Dump.
        container.dump_contents(dir.path(), "Data.csv")?;
        // Assert: Header plus exactly one data row.
        let table = fs::read_to_string(dir.path().join("Data.csv"))?;
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines, vec!["1 Text,1 Image,1 Audio", "hello,,"]);
        Ok(())
    }

    /// The widest entry determines the column count; narrower entries get
    /// trailing empty cells.
    #[test]
    fn test_dump_contents_sparse_columns() -> Result<()> {
        // Setup: One two-facet entry and one single-facet entry.
        let dir = tempdir()?;
        let mut container = ContentContainer::new();
        container.add_content(vec![
            Facet::new().with_text("front"),
            Facet::new().with_text("back"),
        ]);
        container.add_content(vec![Facet::new().with_text("only")]);
        // Action: Dump.
        container.dump_contents(dir.path(), "Data.csv")?;
        // Assert: 6 columns, 2 data rows, trailing cells empty on row two.
        let table = fs::read_to_string(dir.path().join("Data.csv"))?;
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "1 Text,1 Image,1 Audio,2 Text,2 Image,2 Audio");
        assert_eq!(lines[1], "front,,,back,,");
        assert_eq!(lines[2], "only,,,,,");
        Ok(())
    }

    /// Media facets stage a flat copy and record only the base file name.
    #[test]
    fn test_dump_contents_copies_media_flat() -> Result<()> {
        // Setup: A media source file in a nested directory.
        let media_dir = tempdir()?;
        let nested = media_dir.path().join("assets/img");
        fs::create_dir_all(&nested)?;
        let image = nested.join("card.png");
        fs::write(&image, b"png bytes")?;
        // One entry referencing the image.
        let dir = tempdir()?;
        let mut container = ContentContainer::new();
        container.add_content(vec![Facet::new().with_text("front").with_image(&image)]);
        // Action: Dump.
        container.dump_contents(dir.path(), "Data.csv")?;
        // Assert: The cell holds the base name and the copy has identical bytes.
        let table = fs::read_to_string(dir.path().join("Data.csv"))?;
        assert!(table.lines().nth(1).unwrap().contains("card.png"));
        assert_eq!(fs::read(dir.path().join("card.png"))?, b"png bytes");
        Ok(())
    }

    /// Dumping twice must succeed and produce the same table: entries are
    /// never mutated, so media is re-copied from the original paths.
    #[test]
    fn test_dump_contents_is_idempotent() -> Result<()> {
        // Setup: One entry with an audio facet.
        let media_dir = tempdir()?;
        let audio = media_dir.path().join("bonjour.mp3");
        fs::write(&audio, b"mp3 bytes")?;
        let dir = tempdir()?;
        let mut container = ContentContainer::new();
        container.add_content(vec![Facet::new().with_audio(&audio)]);
        // Action: Dump twice.
        container.dump_contents(dir.path(), "Data.csv")?;
        let first = fs::read_to_string(dir.path().join("Data.csv"))?;
        container.dump_contents(dir.path(), "Data.csv")?;
        let second = fs::read_to_string(dir.path().join("Data.csv"))?;
        // Assert: Identical tables, media still staged.
        assert_eq!(first, second);
        assert_eq!(fs::read(dir.path().join("bonjour.mp3"))?, b"mp3 bytes");
        Ok(())
    }

    /// A missing media source aborts the whole dump.
    #[test]
    fn test_dump_contents_missing_media_aborts() -> Result<()> {
        // Setup: An entry referencing a file that does not exist.
        let dir = tempdir()?;
        let mut container = ContentContainer::new();
        container.add_content(vec![Facet::new().with_image("no/such/file.png")]);
        // Action: Dump.
        let result = container.dump_contents(dir.path(), "Data.csv");
        // Assert: The dump failed and no table was written.
        assert!(result.is_err());
        assert!(!dir.path().join("Data.csv").exists());
        Ok(())
    }

    /// Text containing the delimiter is quoted so the column count survives.
    #[test]
    fn test_dump_contents_quotes_delimiter() -> Result<()> {
        // Setup: A text facet containing a comma.
        let dir = tempdir()?;
        let mut container = ContentContainer::new();
        container.add_content(vec![Facet::new().with_text("hello, world")]);
        // Action: Dump.
        container.dump_contents(dir.path(), "Data.csv")?;
        // Assert: The field is quoted in the data row.
        let table = fs::read_to_string(dir.path().join("Data.csv"))?;
        assert_eq!(table.lines().nth(1).unwrap(), "\"hello, world\",,");
        Ok(())
    }
}
