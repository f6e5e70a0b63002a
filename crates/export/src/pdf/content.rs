//! Content stream generation
//!
//! Builds the page's text-drawing operators: one `Tj` per payload line,
//! with the cursor walking down from the top margin by a fixed leading.
//! When the cursor would cross the bottom floor the text block is closed
//! and reopened at the top of the same page; the document stays a single
//! page and later lines overprint earlier ones.

use super::objects::{write_object, Object};
use crate::{ExportError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Font resource key the content stream selects
pub const FONT_KEY: &str = "F1";

/// Page geometry and text layout parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    /// Page width in points
    pub page_width: f64,
    /// Page height in points
    pub page_height: f64,
    /// Left text margin in points
    pub margin_left: f64,
    /// Vertical cursor start, measured from the page bottom
    pub cursor_top: f64,
    /// Downward cursor movement per line
    pub leading: f64,
    /// Lowest cursor position before the layout resets to the top
    pub cursor_floor: f64,
    /// Font size in points
    pub font_size: f64,
}

impl Default for PageLayout {
    fn default() -> Self {
        // US Letter, one-inch left margin, cursor from 720 down to 50
        Self {
            page_width: 612.0,
            page_height: 792.0,
            margin_left: 72.0,
            cursor_top: 720.0,
            leading: 14.0,
            cursor_floor: 50.0,
            font_size: 12.0,
        }
    }
}

/// Content stream builder
#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    /// Create an empty content stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the builder and return the stream body
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Stream body so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Begin a text object (BT)
    pub fn begin_text(&mut self) -> &mut Self {
        self.write_line("BT");
        self
    }

    /// End a text object (ET)
    pub fn end_text(&mut self) -> &mut Self {
        self.write_line("ET");
        self
    }

    /// Set the font and size (Tf)
    pub fn set_font(&mut self, key: &str, size: f64) -> &mut Self {
        self.write_fmt(format_args!("/{} {} Tf\n", key, fmt_num(size)));
        self
    }

    /// Move the text position (Td)
    pub fn move_text(&mut self, tx: f64, ty: f64) -> &mut Self {
        self.write_fmt(format_args!("{} {} Td\n", fmt_num(tx), fmt_num(ty)));
        self
    }

    /// Show an encoded text string (Tj). The operand is a literal string
    /// object, so the reserved-character escaping rule applies.
    pub fn show_text(&mut self, encoded: &[u8]) -> &mut Self {
        let _ = write_object(&mut self.data, &Object::Literal(encoded.to_vec()));
        self.data.extend_from_slice(b" Tj\n");
        self
    }

    fn write_line(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(b'\n');
    }

    fn write_fmt(&mut self, args: std::fmt::Arguments<'_>) {
        let _ = self.data.write_fmt(args);
    }
}

/// Encode one payload line for the page's single-byte font encoding.
/// Characters beyond U+00FF have no code point in that encoding and fail
/// the export.
pub fn encode_line(line: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(line.len());
    for ch in line.chars() {
        let code = ch as u32;
        if code > 0xFF {
            return Err(ExportError::Encoding(ch));
        }
        bytes.push(code as u8);
    }
    Ok(bytes)
}

/// Lay a report payload out as a content stream.
///
/// An empty payload produces an empty stream (a blank page). Otherwise the
/// text block opens at the top margin and every line is shown with `Tj`
/// followed by a relative move one leading down; crossing the floor closes
/// the block and reopens it at the top of the same page.
pub fn layout_report(text: &str, layout: &PageLayout) -> Result<ContentStream> {
    let mut stream = ContentStream::new();
    if text.is_empty() {
        return Ok(stream);
    }

    open_block(&mut stream, layout);
    let mut cursor_y = layout.cursor_top;

    for line in text.lines() {
        let encoded = encode_line(line)?;
        stream.show_text(&encoded);

        cursor_y -= layout.leading;
        if cursor_y < layout.cursor_floor {
            // layout reset, not a new page
            stream.end_text();
            open_block(&mut stream, layout);
            cursor_y = layout.cursor_top;
        } else {
            stream.move_text(0.0, -layout.leading);
        }
    }

    stream.end_text();
    Ok(stream)
}

fn open_block(stream: &mut ContentStream, layout: &PageLayout) {
    stream
        .begin_text()
        .set_font(FONT_KEY, layout.font_size)
        .move_text(layout.margin_left, layout.cursor_top);
}

fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        let s = format!("{n:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
