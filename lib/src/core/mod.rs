//! # StudyArch Core Infrastructure
//!
//! File: lib/src/core/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/studyarch
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that provide
//! foundational functionality for the StudyArch library. These components
//! handle error management and archive layout settings.
//!
//! ## Architecture
//!
//! The core infrastructure consists of two key components:
//! - `config`: Archive layout settings (staging directory names, data file
//!   name, artifact stem/extension), their defaults, loading, and validation
//! - `error`: Error types and the shared `Result` alias
//!
//! These components are used by the model and utility modules to implement
//! their functionality with consistent behavior.
//!
//! ## Usage
//!
//! Core infrastructure is imported by the rest of the crate:
//!
//! ```ignore
//! use crate::core::config::ArchiveSettings; // For archive layout names
//! use crate::core::error::{Result, StudyArchError}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
