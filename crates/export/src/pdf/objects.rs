//! PDF object model
//!
//! The primitive object types the export engine emits, with a byte-level
//! serializer. Only the subset needed by the fixed five-object document is
//! represented; dictionaries keep insertion order so emitted files read in
//! the order the dictionaries were built.

use std::io::{self, Write};

/// A PDF object
#[derive(Debug, Clone)]
pub enum Object {
    /// Integer number
    Integer(i64),
    /// Real (floating-point) number
    Real(f64),
    /// Name object, written with a leading slash
    Name(String),
    /// Literal string, parenthesized and escaped
    Literal(Vec<u8>),
    /// Array of objects
    Array(Vec<Object>),
    /// Dictionary
    Dictionary(Dict),
    /// Stream (dictionary + byte data)
    Stream(StreamObject),
    /// Indirect reference to an object number (generation is always 0 here)
    Reference(u32),
}

/// Insertion-ordered PDF dictionary
#[derive(Debug, Clone, Default)]
pub struct Dict {
    entries: Vec<(String, Object)>,
}

impl Dict {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key-value pair, replacing an existing entry for the key
    pub fn insert(&mut self, key: impl Into<String>, value: Object) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Object)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Set the Type entry
    pub fn with_type(mut self, type_name: &str) -> Self {
        self.insert("Type", Object::Name(type_name.to_string()));
        self
    }
}

/// PDF stream (dictionary + data)
#[derive(Debug, Clone)]
pub struct StreamObject {
    /// Stream dictionary; `Length` is filled in at emission time
    pub dict: Dict,
    /// Stream body
    pub data: Vec<u8>,
}

impl StreamObject {
    /// Create a stream with the given body
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            dict: Dict::new(),
            data,
        }
    }
}

/// Escape the three reserved characters of a literal string.
/// The backslash is handled in the same pass as the parentheses, so escapes
/// introduced here are never escaped again.
pub fn escape_literal(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    for &byte in data {
        if matches!(byte, b'\\' | b'(' | b')') {
            out.push(b'\\');
        }
        out.push(byte);
    }
    out
}

/// Serialize an object to the writer
pub fn write_object<W: Write>(out: &mut W, object: &Object) -> io::Result<()> {
    match object {
        Object::Integer(n) => write!(out, "{n}"),
        Object::Real(n) => write!(out, "{}", fmt_real(*n)),
        Object::Name(name) => write!(out, "/{name}"),
        Object::Literal(data) => {
            out.write_all(b"(")?;
            out.write_all(&escape_literal(data))?;
            out.write_all(b")")
        }
        Object::Array(items) => {
            out.write_all(b"[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_all(b" ")?;
                }
                write_object(out, item)?;
            }
            out.write_all(b"]")
        }
        Object::Dictionary(dict) => write_dict(out, dict),
        Object::Stream(stream) => {
            write_dict(out, &stream.dict)?;
            out.write_all(b"\nstream\n")?;
            out.write_all(&stream.data)?;
            out.write_all(b"\nendstream")
        }
        Object::Reference(num) => write!(out, "{num} 0 R"),
    }
}

fn write_dict<W: Write>(out: &mut W, dict: &Dict) -> io::Result<()> {
    out.write_all(b"<<")?;
    for (key, value) in dict.iter() {
        write!(out, " /{key} ")?;
        write_object(out, value)?;
    }
    out.write_all(b" >>")
}

/// Format a real number without trailing-zero noise
fn fmt_real(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        let s = format!("{n:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
