//! Fixed document structure
//!
//! The engine always emits the same five-object skeleton, so object
//! numbers are assigned by role through an explicit table instead of a
//! dynamic allocator. The cross-reference table depends on offsets being
//! recorded in the same pass as emission; fixed numbering keeps that pass
//! deterministic.

use super::content::{PageLayout, FONT_KEY};
use super::objects::{Dict, Object};

/// Object numbers, fixed by role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ObjectId {
    Catalog = 1,
    Pages = 2,
    Page = 3,
    Contents = 4,
    Font = 5,
}

impl ObjectId {
    /// Every object, in ascending numeric order
    pub const ALL: [ObjectId; 5] = [
        ObjectId::Catalog,
        ObjectId::Pages,
        ObjectId::Page,
        ObjectId::Contents,
        ObjectId::Font,
    ];

    /// The object number
    pub fn number(self) -> u32 {
        self as u32
    }

    /// An indirect reference to this object
    pub fn reference(self) -> Object {
        Object::Reference(self as u32)
    }
}

/// Object count declared in the trailer and xref subsection, including the
/// zero free entry
pub const OBJECT_COUNT: u32 = ObjectId::ALL.len() as u32 + 1;

/// The document catalog (root object)
pub fn catalog_dict() -> Dict {
    let mut dict = Dict::new().with_type("Catalog");
    dict.insert("Pages", ObjectId::Pages.reference());
    dict
}

/// The page tree root, holding the single page
pub fn pages_dict() -> Dict {
    let mut dict = Dict::new().with_type("Pages");
    dict.insert("Kids", Object::Array(vec![ObjectId::Page.reference()]));
    dict.insert("Count", Object::Integer(1));
    dict
}

/// The page object: media box, contents reference, and a resources
/// dictionary exposing the one font under its resource key
pub fn page_dict(layout: &PageLayout) -> Dict {
    let mut dict = Dict::new().with_type("Page");
    dict.insert("Parent", ObjectId::Pages.reference());
    dict.insert(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(layout.page_width),
            Object::Real(layout.page_height),
        ]),
    );
    dict.insert("Contents", ObjectId::Contents.reference());

    let mut fonts = Dict::new();
    fonts.insert(FONT_KEY, ObjectId::Font.reference());

    let mut resources = Dict::new();
    resources.insert("Font", Object::Dictionary(fonts));
    resources.insert(
        "ProcSet",
        Object::Array(vec![
            Object::Name("PDF".to_string()),
            Object::Name("Text".to_string()),
        ]),
    );
    dict.insert("Resources", Object::Dictionary(resources));

    dict
}

/// The font object: standard Type1 Helvetica, not embedded
pub fn font_dict() -> Dict {
    let mut dict = Dict::new().with_type("Font");
    dict.insert("Subtype", Object::Name("Type1".to_string()));
    dict.insert("BaseFont", Object::Name("Helvetica".to_string()));
    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_numbers_are_fixed() {
        assert_eq!(ObjectId::Catalog.number(), 1);
        assert_eq!(ObjectId::Pages.number(), 2);
        assert_eq!(ObjectId::Page.number(), 3);
        assert_eq!(ObjectId::Contents.number(), 4);
        assert_eq!(ObjectId::Font.number(), 5);
        assert_eq!(OBJECT_COUNT, 6);
    }

    #[test]
    fn test_catalog_references_pages() {
        let catalog = catalog_dict();
        assert!(matches!(catalog.get("Pages"), Some(Object::Reference(2))));
    }

    #[test]
    fn test_pages_kid_list_holds_the_page() {
        let pages = pages_dict();
        let Some(Object::Array(kids)) = pages.get("Kids") else {
            panic!("Kids missing");
        };
        assert_eq!(kids.len(), 1);
        assert!(matches!(kids[0], Object::Reference(3)));
        assert!(matches!(pages.get("Count"), Some(Object::Integer(1))));
    }

    #[test]
    fn test_page_parent_and_contents() {
        let page = page_dict(&PageLayout::default());
        assert!(matches!(page.get("Parent"), Some(Object::Reference(2))));
        assert!(matches!(page.get("Contents"), Some(Object::Reference(4))));
    }

    #[test]
    fn test_page_resources_map_font_key() {
        let page = page_dict(&PageLayout::default());
        let Some(Object::Dictionary(resources)) = page.get("Resources") else {
            panic!("Resources missing");
        };
        let Some(Object::Dictionary(fonts)) = resources.get("Font") else {
            panic!("Font missing");
        };
        assert!(matches!(fonts.get(FONT_KEY), Some(Object::Reference(5))));
    }

    #[test]
    fn test_font_is_unembedded_helvetica() {
        let font = font_dict();
        assert!(matches!(font.get("Subtype"), Some(Object::Name(n)) if n == "Type1"));
        assert!(matches!(font.get("BaseFont"), Some(Object::Name(n)) if n == "Helvetica"));
        assert!(font.get("FontFile").is_none());
    }
}
