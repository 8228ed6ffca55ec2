//! Final document assembly and write-out
//!
//! Wraps the rendered table of contents and the mutated document lines in
//! fixed HTML5 boilerplate: header, the `.toc` overlay stylesheet, the
//! `<div class="toc">` container, the document body verbatim, and the
//! closing footer.

use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during document assembly
#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Fixed HTML5 boilerplate opening the assembled document
const HTML_HEADER: &str = "<!DOCTYPE html>\n\
                           <html lang='en'>\n\
                           <head>\n\
                           <meta charset='utf-8'>\n\
                           </head>\n";

/// Closing footer
const HTML_FOOTER: &str = "\n</html>\n";

/// Stylesheet pinning the `.toc` container to a fixed on-screen position
const TOC_STYLES: &str = r"
div.toc {
    position: fixed;
    right: 0;
    top: 20%;
    margin-right: 10px;
    border: 1px solid #AAA;
    background-color: #F9F9F9;
    padding: 5px;
    font-size: 95%;
}
";

/// Assemble the complete output document as a single string
///
/// The lines are re-joined with `\n` exactly as they were split, so every
/// line the injector left untouched round-trips byte-for-byte. No escaping
/// or validation is applied to the TOC fragment or the document body.
pub fn assemble(toc: &str, lines: &[String]) -> String {
    let mut output = String::new();

    output.push_str(HTML_HEADER);
    output.push_str("<style>\n");
    output.push_str(TOC_STYLES);
    output.push_str("</style>\n");
    output.push_str("<div class=\"toc\">\n");
    output.push_str(toc);
    output.push_str("</div>\n");
    output.push_str(&lines.join("\n"));
    output.push_str(HTML_FOOTER);

    output
}

/// Assemble the document and write it to the destination path
///
/// The destination is created or truncated; parent directories are created
/// if they do not exist. The write is not atomic.
pub fn write_document(toc: &str, lines: &[String], output_path: &Path) -> Result<(), AssembleError> {
    let output = assemble(toc, lines);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = fs::File::create(output_path)?;
    file.write_all(output.as_bytes())?;

    Ok(())
}
