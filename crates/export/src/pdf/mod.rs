//! Minimal PDF generation
//!
//! Turns a newline-delimited report payload into a syntactically valid
//! single-page PDF: five fixed objects, an uncompressed content stream with
//! manual text layout, a cross-reference table with measured offsets, and a
//! trailer.
//!
//! # Architecture
//!
//! - `objects`: PDF object model and byte-level serializer
//! - `document`: the fixed five-object structure and its dictionaries
//! - `content`: content stream operators and the line-layout pass
//! - `writer`: file assembly, xref table, trailer

mod content;
mod document;
mod objects;
mod writer;

pub use content::PageLayout;
pub use writer::{render_report, render_report_with, write_report, write_report_sync};
