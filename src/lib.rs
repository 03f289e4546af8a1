//! potgen - POT catalog extractor for Jinja-style templates and JavaScript
//!
//! potgen finds `_()` / `_plural()` calls in templates and `gettext()` /
//! `ngettext()` calls in scripts, validates their arguments, merges
//! identical strings and writes a gettext POT catalog.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and terminal output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (scan, extract, dedupe, serialize)
//! - `issues`: Diagnostic types and reporting trait

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
