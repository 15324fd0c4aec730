//! # StudyArch Integration Test Common Helpers
//!
//! File: lib/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! This module provides shared utility functions used across the
//! integration test files in `lib/tests/`. This avoids code duplication in
//! the test suite.
//!
//! Integration tests are located in the `lib/tests/` directory and each
//! `.rs` file in that directory (that isn't a module like this one) is
//! compiled as a separate test crate linked against the `studyarch`
//! library.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// # Init Tracing (`init_tracing`)
///
/// Installs a `tracing` subscriber honoring `RUST_LOG` so test failures can
/// be debugged with the library's own log output
/// (e.g. `RUST_LOG=debug cargo test`).
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// # Write Media Fixture (`write_media_fixture`)
///
/// Creates a fake media file (the builder never inspects media content, so
/// arbitrary bytes suffice) at `dir/rel_path`, creating intermediate
/// directories as needed.
///
/// ## Panics
/// Panics on I/O failure; fixtures failing to write is a test bug, not a
/// behavior under test.
///
/// ## Returns
/// * `PathBuf` - The absolute path of the created fixture file.
pub fn write_media_fixture(dir: &Path, rel_path: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(rel_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture parent directory");
    }
    fs::write(&path, bytes).expect("Failed to write media fixture");
    path
}

/// # Read Zip Entry (`read_zip_entry`)
///
/// Opens the zip container at `zip_path` and returns the raw bytes of the
/// named entry, panicking with a descriptive message when the entry is
/// missing. Used to verify `.studyarch` artifacts end to end.
pub fn read_zip_entry(zip_path: &Path, entry_name: &str) -> Vec<u8> {
    use std::io::Read;

    let file = fs::File::open(zip_path).expect("Failed to open artifact zip");
    let mut archive = zip::ZipArchive::new(file).expect("Artifact is not a valid zip container");
    let mut entry = archive
        .by_name(entry_name)
        .unwrap_or_else(|_| panic!("Artifact is missing entry '{}'", entry_name));
    let mut bytes = Vec::new();
    entry
        .read_to_end(&mut bytes)
        .expect("Failed to read zip entry");
    bytes
}

/// # List Zip Entries (`list_zip_entries`)
///
/// Returns every entry name in the zip container at `zip_path` (directory
/// entries keep their trailing `/`).
pub fn list_zip_entries(zip_path: &Path) -> Vec<String> {
    let file = fs::File::open(zip_path).expect("Failed to open artifact zip");
    let mut archive = zip::ZipArchive::new(file).expect("Artifact is not a valid zip container");
    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        names.push(archive.by_index(i).expect("Failed to read zip entry").name().to_string());
    }
    names
}
