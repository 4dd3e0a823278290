//! Font collaborators of text objects.
//!
//! The generator only needs three things from a font: an identity to
//! deduplicate resources, a way to turn text into the bytes shown by `Tj`, and
//! the font object to register in the resource dictionary.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::pdf::{Dictionary, Name, Object, Reference};

/// Opaque identity of a font resource. Two handles to the same font share an
/// id, two fonts never do, even if their base font names match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(u64);

impl FontId {
    pub fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        FontId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// How a font is stored in the document.
#[derive(Debug, Clone, PartialEq)]
pub enum FontObject {
    /// The font dictionary already is an indirect object.
    Indirect(Reference),
    /// The font dictionary still has to be stored.
    Direct(Dictionary),
}

pub trait Font {
    fn resource_identity(&self) -> FontId;

    fn base_font_name(&self) -> &str;

    /// Bytes shown for `text`, in the font's encoding.
    fn encode_text(&self, text: &str) -> Vec<u8>;

    /// Whether encoded text may be written as a literal string. Hex strings
    /// are always safe.
    fn literal_safe(&self) -> bool {
        false
    }

    fn font_object(&self) -> FontObject;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSubtype {
    Type1,
    TrueType,
}

impl FontSubtype {
    pub fn name(&self) -> &'static str {
        match self {
            FontSubtype::Type1 => "Type1",
            FontSubtype::TrueType => "TrueType",
        }
    }
}

/// Names of the standard 14 fonts every reader provides.
const STANDARD_FONTS: [&str; 14] = [
    "Courier",
    "Courier-Bold",
    "Courier-BoldOblique",
    "Courier-Oblique",
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-BoldOblique",
    "Helvetica-Oblique",
    "Times-Roman",
    "Times-Bold",
    "Times-BoldItalic",
    "Times-Italic",
    "Symbol",
    "ZapfDingbats",
];

/// Common system font names and the standard font substituted for them.
const FONT_ALIASES: [(&str, &str); 12] = [
    ("Arial", "Helvetica"),
    ("Arial,Bold", "Helvetica-Bold"),
    ("Arial,BoldItalic", "Helvetica-BoldOblique"),
    ("Arial,Italic", "Helvetica-Oblique"),
    ("CourierNew", "Courier"),
    ("CourierNew,Bold", "Courier-Bold"),
    ("CourierNew,BoldItalic", "Courier-BoldOblique"),
    ("CourierNew,Italic", "Courier-Oblique"),
    ("TimesNewRoman", "Times-Roman"),
    ("TimesNewRoman,Bold", "Times-Bold"),
    ("TimesNewRoman,BoldItalic", "Times-BoldItalic"),
    ("TimesNewRoman,Italic", "Times-Italic"),
];

pub const DEFAULT_FONT: &str = "Helvetica";

/// Single byte font: characters up to U+00FF map to their code point, anything
/// else is shown as `?`.
#[derive(Debug, Clone)]
pub struct SimpleFont {
    id: FontId,
    base_font: String,
    subtype: FontSubtype,
    reference: Option<Reference>,
}

impl SimpleFont {
    pub fn new(base_font: &str, subtype: FontSubtype) -> Self {
        Self {
            id: FontId::next(),
            base_font: base_font.to_owned(),
            subtype,
            reference: None,
        }
    }

    /// One of the standard Type1 fonts. System names like `Arial` resolve to
    /// their standard counterpart, unknown names fall back to Helvetica.
    pub fn standard(name: &str) -> Self {
        let base_font = STANDARD_FONTS
            .iter()
            .find(|&&standard| standard == name)
            .copied()
            .or_else(|| {
                FONT_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == name)
                    .map(|(_, standard)| *standard)
            })
            .unwrap_or_else(|| {
                log::warn!("`{}` is no standard font, using {}", name, DEFAULT_FONT);
                DEFAULT_FONT
            });
        Self::new(base_font, FontSubtype::Type1)
    }

    /// Use an already stored font dictionary instead of creating one.
    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn subtype(&self) -> FontSubtype {
        self.subtype
    }
}

impl Font for SimpleFont {
    fn resource_identity(&self) -> FontId {
        self.id
    }

    fn base_font_name(&self) -> &str {
        &self.base_font
    }

    fn encode_text(&self, text: &str) -> Vec<u8> {
        text.chars()
            .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
            .collect()
    }

    fn font_object(&self) -> FontObject {
        match self.reference {
            Some(reference) => FontObject::Indirect(reference),
            None => FontObject::Direct(Dictionary::from([
                (Name::from_str("Type"), Object::from(Name::from_str("Font"))),
                (Name::from_str("Subtype"), Object::from(Name::from_str(self.subtype.name()))),
                (Name::from_str("BaseFont"), Object::from(Name::from_str(&self.base_font))),
            ])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_names_and_aliases() {
        assert_eq!(SimpleFont::standard("Times-Roman").base_font_name(), "Times-Roman");
        assert_eq!(SimpleFont::standard("Arial").base_font_name(), "Helvetica");
        assert_eq!(SimpleFont::standard("Comic Sans").base_font_name(), DEFAULT_FONT);
    }

    #[test]
    fn identities_are_distinct() {
        let a = SimpleFont::standard("Helvetica");
        let b = SimpleFont::standard("Helvetica");
        assert_ne!(a.resource_identity(), b.resource_identity());
        assert_eq!(a.clone().resource_identity(), a.resource_identity());
    }

    #[test]
    fn single_byte_encoding() {
        let font = SimpleFont::standard("Helvetica");
        assert_eq!(font.encode_text("Hello World"), b"Hello World".to_vec());
        assert_eq!(font.encode_text("caf\u{e9} \u{263a}"), b"caf\xe9 ?".to_vec());
    }

    #[test]
    fn direct_font_dictionary() {
        let font = SimpleFont::standard("Times-Roman");
        let FontObject::Direct(dict) = font.font_object() else {
            panic!("standard font has no stored dictionary");
        };
        assert_eq!(dict.get(b"Type").and_then(Object::name), Some(&Name::from_str("Font")));
        assert_eq!(dict.get(b"Subtype").and_then(Object::name), Some(&Name::from_str("Type1")));
        assert_eq!(
            dict.get(b"BaseFont").and_then(Object::name),
            Some(&Name::from_str("Times-Roman"))
        );
    }

    #[test]
    fn indirect_font_object() {
        let font = SimpleFont::new("Helvetica", FontSubtype::TrueType).with_reference(Reference::new(4, 0));
        assert_eq!(font.font_object(), FontObject::Indirect(Reference::new(4, 0)));
        assert_eq!(font.subtype(), FontSubtype::TrueType);
    }
}
