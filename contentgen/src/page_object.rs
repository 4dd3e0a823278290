//! Drawable objects of a page or form.
//!
//! The object model is owned by the caller. The generator reads it and only
//! ever touches the `emitted` bookkeeping flag.

pub use self::{
    image::{FormObject, ImageObject},
    path::PathObject,
    text::{TextObject, TextRenderMode},
};

use crate::geometry::{FillRule, Path};

mod image;
mod path;
mod text;

/// Device RGB colour, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Components quantized to 8 bits, rounding half up.
    pub fn to_bytes(&self) -> [u8; 3] {
        fn quantize(component: f32) -> u8 {
            (component.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
        }
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

/// Colours an object sets. `None` inherits whatever is current.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorState {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineCap {
    #[default]
    Butt = 0,
    Round = 1,
    Square = 2,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineJoin {
    #[default]
    Miter = 0,
    Round = 1,
    Bevel = 2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphState {
    pub line_width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub dash_array: Vec<f32>,
    pub dash_phase: f32,
}

impl GraphState {
    pub const DEFAULT_LINE_WIDTH: f32 = 1.0;
}

impl Default for GraphState {
    fn default() -> Self {
        Self {
            line_width: Self::DEFAULT_LINE_WIDTH,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
            dash_array: Vec::new(),
            dash_phase: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl BlendMode {
    pub fn name(&self) -> &'static str {
        match self {
            BlendMode::Normal => "Normal",
            BlendMode::Multiply => "Multiply",
            BlendMode::Screen => "Screen",
            BlendMode::Overlay => "Overlay",
            BlendMode::Darken => "Darken",
            BlendMode::Lighten => "Lighten",
            BlendMode::ColorDodge => "ColorDodge",
            BlendMode::ColorBurn => "ColorBurn",
            BlendMode::HardLight => "HardLight",
            BlendMode::SoftLight => "SoftLight",
            BlendMode::Difference => "Difference",
            BlendMode::Exclusion => "Exclusion",
            BlendMode::Hue => "Hue",
            BlendMode::Saturation => "Saturation",
            BlendMode::Color => "Color",
            BlendMode::Luminosity => "Luminosity",
        }
    }
}

/// Transparency parameters that end up in an `ExtGState` dictionary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralState {
    pub fill_alpha: f32,
    pub stroke_alpha: f32,
    pub blend_mode: BlendMode,
}

impl Default for GeneralState {
    fn default() -> Self {
        Self {
            fill_alpha: 1.0,
            stroke_alpha: 1.0,
            blend_mode: BlendMode::Normal,
        }
    }
}

/// Intersection of one or more paths, each with its own fill rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipPath {
    paths: Vec<(Path, FillRule)>,
}

impl ClipPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_path(&mut self, path: Path, fill_rule: FillRule) {
        self.paths.push((path, fill_rule));
    }

    pub fn paths(&self) -> &[(Path, FillRule)] {
        &self.paths
    }
}

/// Paint state shared by all object kinds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectState {
    pub color: ColorState,
    pub graph: GraphState,
    pub general: GeneralState,
    pub clip_path: Option<ClipPath>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Path,
    Text,
    Image,
    Form,
}

#[derive(Debug, Clone)]
pub enum PageObject {
    Path(PathObject),
    Text(TextObject),
    Image(ImageObject),
    Form(FormObject),
}

impl PageObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            PageObject::Path(_) => ObjectKind::Path,
            PageObject::Text(_) => ObjectKind::Text,
            PageObject::Image(_) => ObjectKind::Image,
            PageObject::Form(_) => ObjectKind::Form,
        }
    }

    pub fn state(&self) -> &ObjectState {
        match self {
            PageObject::Path(o) => &o.state,
            PageObject::Text(o) => &o.state,
            PageObject::Image(o) => &o.state,
            PageObject::Form(o) => &o.state,
        }
    }

    pub fn state_mut(&mut self) -> &mut ObjectState {
        match self {
            PageObject::Path(o) => &mut o.state,
            PageObject::Text(o) => &mut o.state,
            PageObject::Image(o) => &mut o.state,
            PageObject::Form(o) => &mut o.state,
        }
    }

    /// Whether the object is part of the holder's stored content stream.
    pub fn is_emitted(&self) -> bool {
        match self {
            PageObject::Path(o) => o.emitted,
            PageObject::Text(o) => o.emitted,
            PageObject::Image(o) => o.emitted,
            PageObject::Form(o) => o.emitted,
        }
    }

    pub(crate) fn mark_emitted(&mut self) {
        match self {
            PageObject::Path(o) => o.emitted = true,
            PageObject::Text(o) => o.emitted = true,
            PageObject::Image(o) => o.emitted = true,
            PageObject::Form(o) => o.emitted = true,
        }
    }
}

impl From<PathObject> for PageObject {
    fn from(o: PathObject) -> Self {
        PageObject::Path(o)
    }
}

impl From<TextObject> for PageObject {
    fn from(o: TextObject) -> Self {
        PageObject::Text(o)
    }
}

impl From<ImageObject> for PageObject {
    fn from(o: ImageObject) -> Self {
        PageObject::Image(o)
    }
}

impl From<FormObject> for PageObject {
    fn from(o: FormObject) -> Self {
        PageObject::Form(o)
    }
}
