//! Core data types used across all pipeline phases.
//!
//! ## Module Structure
//!
//! - `record`: Extracted messages (StringRecord, Location)
//! - `source`: Source code location types (SourceContext, SourceLocation)

pub mod record;
pub mod source;

pub use record::{Location, StringRecord};
pub use source::{SourceContext, SourceLocation, line_at, offset_to_line_col};
