//! Command-line interface definitions for htoc

use clap::Parser;
use std::path::PathBuf;

/// CLI structure for the htoc application
///
/// Exactly two positional arguments; missing ones make clap print its
/// usage message and exit non-zero before any file is touched.
#[derive(Parser)]
#[command(name = "htoc")]
#[command(version)]
#[command(about = "Inject heading anchors and a table-of-contents overlay into an HTML document", long_about = None)]
pub struct Cli {
    /// Source HTML document to read
    pub source: PathBuf,

    /// Destination path for the augmented document (created or overwritten)
    pub destination: PathBuf,
}
