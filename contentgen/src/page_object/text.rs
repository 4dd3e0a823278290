use std::rc::Rc;

use crate::{font::Font, geometry::Matrix};

use super::ObjectState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextRenderMode {
    #[default]
    Fill = 0,
    Stroke = 1,
    FillStroke = 2,
    Invisible = 3,
    FillClip = 4,
    StrokeClip = 5,
    FillStrokeClip = 6,
    Clip = 7,
}

impl TextRenderMode {
    /// Operand of the `Tr` operator.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

#[derive(Clone, Default)]
pub struct TextObject {
    pub state: ObjectState,
    pub text: String,
    /// Falls back to Helvetica when unset.
    pub font: Option<Rc<dyn Font>>,
    pub font_size: f32,
    pub char_spacing: f32,
    pub render_mode: TextRenderMode,
    /// Text matrix written with `Tm`.
    pub matrix: Matrix,
    pub(crate) emitted: bool,
}

impl TextObject {
    pub fn new(text: &str, font: Rc<dyn Font>, font_size: f32) -> Self {
        Self {
            text: text.to_owned(),
            font: Some(font),
            font_size,
            ..Self::default()
        }
    }

    pub fn transform(&mut self, matrix: &Matrix) {
        self.matrix = self.matrix.concat(matrix);
    }
}

impl std::fmt::Debug for TextObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextObject")
            .field("text", &self.text)
            .field("font", &self.font.as_ref().map(|font| font.base_font_name().to_owned()))
            .field("font_size", &self.font_size)
            .field("render_mode", &self.render_mode)
            .field("matrix", &self.matrix)
            .finish()
    }
}
