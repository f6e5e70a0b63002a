//! PDF file assembly
//!
//! Emits the document into an in-memory buffer, recording each object's
//! byte offset at the moment its header is appended. The cross-reference
//! table and the trailer's `startxref` value are rendered from those
//! measured offsets, so they are exact by construction. The buffer touches
//! the filesystem only once, after assembly has fully succeeded.

use super::content::{layout_report, PageLayout};
use super::document::{catalog_dict, font_dict, page_dict, pages_dict, ObjectId, OBJECT_COUNT};
use super::objects::{write_object, Dict, Object, StreamObject};
use crate::Result;
use std::io::Write;
use std::path::Path;

const PDF_VERSION: &str = "1.4";

/// Buffered writer for a single document
struct PdfWriter {
    buf: Vec<u8>,
    /// (object number, byte offset) in emission order
    offsets: Vec<(u32, u64)>,
}

impl PdfWriter {
    fn new() -> Self {
        Self {
            buf: Vec::new(),
            offsets: Vec::new(),
        }
    }

    fn position(&self) -> u64 {
        self.buf.len() as u64
    }

    /// Write the header line. No binary marker comment follows: the
    /// document carries text operators only.
    fn write_header(&mut self) -> Result<()> {
        write!(self.buf, "%PDF-{PDF_VERSION}\n")?;
        Ok(())
    }

    /// Write an indirect object, recording its offset
    fn write_indirect(&mut self, id: ObjectId, object: Object) -> Result<()> {
        self.offsets.push((id.number(), self.position()));
        write!(self.buf, "{} 0 obj\n", id.number())?;
        write_object(&mut self.buf, &object)?;
        self.buf.extend_from_slice(b"\nendobj\n");
        Ok(())
    }

    /// Write a stream object, filling in its exact body length
    fn write_stream(&mut self, id: ObjectId, mut stream: StreamObject) -> Result<()> {
        stream
            .dict
            .insert("Length", Object::Integer(stream.data.len() as i64));
        self.write_indirect(id, Object::Stream(stream))
    }

    /// Write the cross-reference table and trailer
    fn write_xref_and_trailer(&mut self) -> Result<()> {
        let xref_offset = self.position();
        self.offsets.sort_by_key(|&(num, _)| num);

        self.buf.extend_from_slice(b"xref\n");
        write!(self.buf, "0 {OBJECT_COUNT}\n")?;
        self.buf.extend_from_slice(b"0000000000 65535 f \n");
        for &(_, offset) in &self.offsets {
            write!(self.buf, "{offset:010} 00000 n \n")?;
        }

        self.buf.extend_from_slice(b"trailer\n");
        let mut trailer = Dict::new();
        trailer.insert("Size", Object::Integer(OBJECT_COUNT as i64));
        trailer.insert("Root", ObjectId::Catalog.reference());
        write_object(&mut self.buf, &Object::Dictionary(trailer))?;

        write!(self.buf, "\nstartxref\n{xref_offset}\n")?;
        self.buf.extend_from_slice(b"%%EOF\n");
        Ok(())
    }

    fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Render a report payload as a complete PDF byte sequence, using the
/// default page layout
pub fn render_report(text: &str) -> Result<Vec<u8>> {
    render_report_with(text, &PageLayout::default())
}

/// Render a report payload with explicit layout parameters.
///
/// Emission order is catalog, pages, page, font, contents; the xref table
/// lists entries in ascending object-number order regardless.
pub fn render_report_with(text: &str, layout: &PageLayout) -> Result<Vec<u8>> {
    let content = layout_report(text, layout)?;

    let mut writer = PdfWriter::new();
    writer.write_header()?;
    writer.write_indirect(ObjectId::Catalog, Object::Dictionary(catalog_dict()))?;
    writer.write_indirect(ObjectId::Pages, Object::Dictionary(pages_dict()))?;
    writer.write_indirect(ObjectId::Page, Object::Dictionary(page_dict(layout)))?;
    writer.write_indirect(ObjectId::Font, Object::Dictionary(font_dict()))?;
    writer.write_stream(ObjectId::Contents, StreamObject::new(content.into_bytes()))?;
    writer.write_xref_and_trailer()?;

    Ok(writer.into_bytes())
}

/// Write a report payload to `path` as PDF, overwriting any existing file.
/// The document is assembled fully in memory first, so a failed
/// serialization never leaves a truncated file behind.
pub async fn write_report(text: &str, path: impl AsRef<Path>) -> Result<()> {
    let bytes = render_report(text)?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

/// Synchronous variant of [`write_report`]
pub fn write_report_sync(text: &str, path: impl AsRef<Path>) -> Result<()> {
    let bytes = render_report(text)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
