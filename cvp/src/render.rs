//! Serializer and presenter for the populated document

use std::io::{self, Write};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;
use tracing::debug;

use crate::{BANNER, INDENT_WIDTH};

/// Errors raised while rendering or writing the document
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Render `doc` as indented JSON, keys in declaration order
///
/// Non-ASCII characters are written as raw UTF-8, not `\uXXXX` escapes.
pub fn render(doc: &Value) -> Result<String, RenderError> {
    let indent = vec![b' '; INDENT_WIDTH];
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    doc.serialize(&mut ser)?;
    debug!(bytes = buf.len(), "render: serialized document");
    Ok(String::from_utf8(buf)?)
}

/// Write the banner followed by the rendered document
pub fn present<W: Write>(mut out: W, doc: &Value) -> Result<(), RenderError> {
    let text = render(doc)?;
    write!(out, "\n{}\n\n", BANNER)?;
    writeln!(out, "{}", text)?;
    out.flush()?;
    Ok(())
}
