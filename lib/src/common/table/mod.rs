//! # StudyArch Table Utilities (`common::table`)
//!
//! File: lib/src/common/table/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! This module groups the tabular-encoding utilities used to serialize
//! content containers. The archive format records each container as a flat
//! `Data.csv` table; this module owns the encoding rules so the model code
//! only deals in cell values.
//!
//! ## Architecture
//!
//! A single submodule:
//!
//! - **`csv`**: Minimal-quoting CSV field and row encoding. A field is
//!   quoted (with embedded quotes doubled) only when it contains a comma, a
//!   quote, or a line break — everything else is written verbatim.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::common::table::csv;
//!
//! let header = csv::encode_row(&["1 Text".into(), "1 Image".into(), "1 Audio".into()]);
//! assert_eq!(header, "1 Text,1 Image,1 Audio\n");
//! ```
//!

/// Contains minimal-quoting CSV encoding (e.g., `encode_field`, `encode_row`).
pub mod csv;
