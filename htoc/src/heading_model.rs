//! Heading model for the scanning stage
//!
//! This module defines the structures produced while scanning the source
//! document: the flat, document-ordered heading records and the anchor
//! identifiers later attached to them.

// Submodules
mod anchor_id;
mod error;
mod heading;
mod scanner;

// Re-export public types
pub use anchor_id::AnchorId;
pub use error::ScanError;
pub use heading::Heading;
pub use scanner::{scan_headings, HeadingScanner};
