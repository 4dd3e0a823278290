//! Settings a renderer consumes when painting page objects.
//!
//! Nothing here renders. The options only decide how colours are translated
//! and which objects are visible.

use std::rc::Rc;

use crate::{
    page_object::{ObjectKind, PageObject},
    pdf::Dictionary,
};

/// Colour packed as `0xAARRGGBB`.
pub type Argb = u32;

pub fn argb_encode(a: u8, r: u8, g: u8, b: u8) -> Argb {
    u32::from_be_bytes([a, r, g, b])
}

/// `(a, r, g, b)`
pub fn argb_decode(argb: Argb) -> (u8, u8, u8, u8) {
    let [a, r, g, b] = argb.to_be_bytes();
    (a, r, g, b)
}

const CACHE_SIZE_LIMIT: u32 = 100 * 1024 * 1024;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Normal,
    Gray,
    Alpha,
    /// Paths and text are painted with the colours of a [`ColorScheme`].
    ForcedColor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorScheme {
    pub path_fill_color: Argb,
    pub path_stroke_color: Argb,
    pub text_fill_color: Argb,
    pub text_stroke_color: Argb,
}

/// Optional content configuration deciding what is shown.
pub trait OcContext {
    fn check_dictionary_visible(&self, optional_content: &Dictionary) -> bool;

    fn check_object_visible(&self, object: &PageObject) -> bool;
}

#[derive(Clone, Default)]
pub struct RenderOptions {
    pub color_mode: ColorMode,
    pub color_scheme: ColorScheme,
    pub oc_context: Option<Rc<dyn OcContext>>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache_size_limit(&self) -> u32 {
        CACHE_SIZE_LIMIT
    }

    /// Colour as painted in the current mode. Gray mode keeps the alpha and
    /// replaces the colour by its luminance.
    pub fn translate_color(&self, argb: Argb) -> Argb {
        match self.color_mode {
            ColorMode::Normal | ColorMode::Alpha => argb,
            ColorMode::Gray | ColorMode::ForcedColor => {
                let (a, r, g, b) = argb_decode(argb);
                let gray = (u32::from(r) * 30 + u32::from(g) * 59 + u32::from(b) * 11) / 100;
                let gray = gray as u8;
                argb_encode(a, gray, gray, gray)
            }
        }
    }

    pub fn translate_object_fill_color(&self, argb: Argb, kind: ObjectKind) -> Argb {
        if self.color_mode != ColorMode::ForcedColor {
            return self.translate_color(argb);
        }
        match kind {
            ObjectKind::Path => self.color_scheme.path_fill_color,
            ObjectKind::Text => self.color_scheme.text_fill_color,
            _ => argb,
        }
    }

    pub fn translate_object_stroke_color(&self, argb: Argb, kind: ObjectKind) -> Argb {
        if self.color_mode != ColorMode::ForcedColor {
            return self.translate_color(argb);
        }
        match kind {
            ObjectKind::Path => self.color_scheme.path_stroke_color,
            ObjectKind::Text => self.color_scheme.text_stroke_color,
            _ => argb,
        }
    }

    /// Everything is visible without an optional content context.
    pub fn is_visible(&self, object: &PageObject) -> bool {
        self.oc_context
            .as_ref()
            .map_or(true, |context| context.check_object_visible(object))
    }

    pub fn is_dictionary_visible(&self, optional_content: &Dictionary) -> bool {
        self.oc_context
            .as_ref()
            .map_or(true, |context| context.check_dictionary_visible(optional_content))
    }
}

impl std::fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderOptions")
            .field("color_mode", &self.color_mode)
            .field("color_scheme", &self.color_scheme)
            .field("oc_context", &self.oc_context.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::{Matrix, Path},
        page_object::{ImageObject, PathObject, TextObject},
        pdf::Reference,
    };

    struct HideText;

    impl OcContext for HideText {
        fn check_dictionary_visible(&self, optional_content: &Dictionary) -> bool {
            !optional_content.is_empty()
        }

        fn check_object_visible(&self, object: &PageObject) -> bool {
            object.kind() != ObjectKind::Text
        }
    }

    fn scheme() -> ColorScheme {
        ColorScheme {
            path_fill_color: 0xff00_0001,
            path_stroke_color: 0xff00_0002,
            text_fill_color: 0xff00_0003,
            text_stroke_color: 0xff00_0004,
        }
    }

    #[test]
    fn argb_packing() {
        assert_eq!(argb_encode(0x80, 0x11, 0x22, 0x33), 0x8011_2233);
        assert_eq!(argb_decode(0x8011_2233), (0x80, 0x11, 0x22, 0x33));
    }

    #[test]
    fn normal_and_alpha_keep_colors() {
        let mut options = RenderOptions::new();
        assert_eq!(options.translate_color(0xff12_3456), 0xff12_3456);
        options.color_mode = ColorMode::Alpha;
        assert_eq!(options.translate_color(0xff12_3456), 0xff12_3456);
    }

    #[test]
    fn gray_keeps_alpha() {
        let options = RenderOptions {
            color_mode: ColorMode::Gray,
            ..RenderOptions::default()
        };
        // (255 * 30 + 0 * 59 + 0 * 11) / 100 = 76
        assert_eq!(options.translate_color(argb_encode(0x40, 255, 0, 0)), argb_encode(0x40, 76, 76, 76));
        assert_eq!(options.translate_color(0xffff_ffff), 0xffff_ffff);
        assert_eq!(options.translate_object_fill_color(0xff00_00ff, ObjectKind::Path), 0xff1c_1c1c);
    }

    #[test]
    fn forced_colors_apply_to_paths_and_text() {
        let options = RenderOptions {
            color_mode: ColorMode::ForcedColor,
            color_scheme: scheme(),
            oc_context: None,
        };
        assert_eq!(options.translate_object_fill_color(0xffff_ffff, ObjectKind::Path), 0xff00_0001);
        assert_eq!(options.translate_object_stroke_color(0xffff_ffff, ObjectKind::Path), 0xff00_0002);
        assert_eq!(options.translate_object_fill_color(0xffff_ffff, ObjectKind::Text), 0xff00_0003);
        assert_eq!(options.translate_object_stroke_color(0xffff_ffff, ObjectKind::Text), 0xff00_0004);
        assert_eq!(options.translate_object_fill_color(0xffab_cdef, ObjectKind::Image), 0xffab_cdef);
        assert_eq!(options.translate_object_stroke_color(0xffab_cdef, ObjectKind::Form), 0xffab_cdef);
    }

    #[test]
    fn visibility() {
        let path = PageObject::from(PathObject::new(Path::new()));
        let text = PageObject::from(TextObject::default());
        let image = PageObject::from(ImageObject::new(Reference::new(1, 0), Matrix::IDENTITY));

        let mut options = RenderOptions::new();
        assert!(options.is_visible(&text));
        assert!(options.is_dictionary_visible(&Dictionary::new()));

        options.oc_context = Some(Rc::new(HideText));
        assert!(options.is_visible(&path));
        assert!(options.is_visible(&image));
        assert!(!options.is_visible(&text));
        assert!(!options.is_dictionary_visible(&Dictionary::new()));
    }

    #[test]
    fn cache_limit() {
        assert_eq!(RenderOptions::new().cache_size_limit(), 104_857_600);
    }
}
