//! Core extraction engine.
//!
//! Sources flow through four stages: scan (`file_scanner`), per-file
//! extraction (`extract`, built on the `parsers` adapters), deduplication
//! (`dedupe`) and serialization (`catalog`). `pipeline` wires the middle
//! stages together for one output target.
//!
//! ## Module Structure
//!
//! - `catalog`: POT text generation and string escaping
//! - `data`: Records and source locations shared by every stage
//! - `dedupe`: Merges records sharing a msgid
//! - `extract`: Marker call location, validation and normalization
//! - `file_scanner`: Expands files, directories and globs into a file list
//! - `parsers`: Template and script parser adapters
//! - `pipeline`: Per-target orchestration (parallel extraction, merge, dedupe)

pub mod catalog;
pub mod data;
pub mod dedupe;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod pipeline;

pub use data::{Location, SourceContext, SourceLocation, StringRecord};
pub use extract::{ExtensionMap, Extract, Extractor, SourceKind};
pub use pipeline::{CatalogData, build_catalog};
