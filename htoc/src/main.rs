//! htoc - HTML table-of-contents generator
//!
//! Reads an HTML document, gives every heading reachable from the first
//! heading a hierarchical anchor id, and writes the document back out
//! prefixed with a fixed-position table-of-contents overlay linking into
//! it.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod anchor_injector;
mod cli;
mod heading_model;
mod heading_tree;
mod html_assembler;
mod pipeline;
mod toc_renderer;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

/// Main entry point for the htoc CLI application
fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    println!("Generating table of contents...");
    println!("Input: {}", cli.source.display());
    println!("Output: {}", cli.destination.display());

    let summary = pipeline::generate(&cli.source, &cli.destination)?;

    println!(
        "✓ Anchored {} of {} headings",
        summary.anchored_count, summary.heading_count
    );
    println!("✓ Successfully wrote: {}", cli.destination.display());

    Ok(())
}
