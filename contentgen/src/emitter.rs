//! Translation of page objects into content stream operators.
//!
//! Every object is written into its own `q ... Q` scope, so no state leaks
//! from one object into the next and the transformation is always written.

use crate::{
    font::Font,
    geometry::{FillRule, Matrix, Path, PointKind},
    number::{write_color_component, write_real},
    page_object::{ClipPath, FormObject, ImageObject, ObjectState, PageObject, PathObject, TextObject},
    pdf::{Array, Dictionary, PdfString},
    resource::{ObjectStore, ResourceInterner},
    simple_encode::{write_hex_string, SimpleEncoder},
    state::{StateOp, StateTracker},
    writer::{Encoder, Writer},
};

/// Everything an object needs to be written: the holder's resources and the
/// state of the stream written so far.
pub struct Emitter<'a> {
    pub resources: &'a mut Dictionary,
    pub interner: &'a mut ResourceInterner,
    pub store: &'a mut dyn ObjectStore,
    pub state: &'a mut StateTracker,
}

impl<'a> Emitter<'a> {
    pub fn process_object(&mut self, buf: &mut dyn Writer, object: &PageObject) {
        log::trace!("Writing {:?} object", object.kind());
        match object {
            PageObject::Path(path) => self.process_path(buf, path),
            PageObject::Text(text) => self.process_text(buf, text),
            PageObject::Image(image) => self.process_image(buf, image),
            PageObject::Form(form) => self.process_form(buf, form),
        }
    }

    /// Open a scope and write the paint state, the clip path and the extended
    /// graphics state of an object. Leaves a trailing space.
    pub fn process_graphics(&mut self, buf: &mut dyn Writer, state: &ObjectState) {
        buf.write(b"q ");
        self.state.save();

        for op in self.state.transition(state) {
            write_state_op(buf, &op);
        }

        if let Some(clip_path) = &state.clip_path {
            write_clip_path(buf, clip_path);
        }

        if let Some(key) = self.state.transition_general(&state.general) {
            let name = self.interner.graphics_state(key, self.resources, self.store);
            SimpleEncoder::write_to(&name, buf);
            buf.write(b" gs ");
        }
    }

    /// `q <state> <matrix> cm <path> <paint> Q`
    pub fn process_path(&mut self, buf: &mut dyn Writer, path: &PathObject) {
        self.process_graphics(buf, &path.state);

        write_matrix(buf, &path.matrix);
        buf.write(b" cm ");

        write_path(buf, &path.path);
        if !path.path.is_empty() {
            buf.write(b" ");
        }
        let paint: &[u8] = match (path.fill, path.stroke) {
            (None, false) => b"n",
            (None, true) => b"S",
            (Some(FillRule::Winding), false) => b"f",
            (Some(FillRule::Winding), true) => b"B",
            (Some(FillRule::EvenOdd), false) => b"f*",
            (Some(FillRule::EvenOdd), true) => b"B*",
        };
        buf.write(paint);
        self.close_scope(buf);
    }

    /// `q <state> BT <matrix> Tm /<font> <size> Tf <mode> Tr <text> Tj ET Q`
    pub fn process_text(&mut self, buf: &mut dyn Writer, text: &TextObject) {
        self.process_graphics(buf, &text.state);

        buf.write(b"BT ");
        write_matrix(buf, &text.matrix);
        buf.write(b" Tm ");

        let default_font;
        let font: &dyn Font = match &text.font {
            Some(font) => font.as_ref(),
            None => {
                default_font = self.interner.default_font();
                &default_font
            }
        };
        let name = self.interner.font(font, self.resources, self.store);
        SimpleEncoder::write_to(&name, buf);
        buf.write(b" ");
        write_real(buf, text.font_size);
        buf.write(b" Tf ");
        buf.write(text.render_mode.code().to_string().as_bytes());
        buf.write(b" Tr ");

        let encoded = font.encode_text(&text.text);
        if font.literal_safe() {
            SimpleEncoder::write_to(&PdfString::from(encoded), buf);
        } else {
            write_hex_string(&encoded, buf);
        }
        buf.write(b" Tj ET");
        self.close_scope(buf);
    }

    /// `q <matrix> cm /<image> Do Q`. Images carry no paint state of their own.
    pub fn process_image(&mut self, buf: &mut dyn Writer, image: &ImageObject) {
        if image.matrix.is_degenerate() {
            log::warn!("Skipping image {} with degenerate matrix {:?}", image.image, image.matrix);
            return;
        }
        let name = self.interner.xobject(image.image, self.resources);

        buf.write(b"q ");
        self.state.save();
        write_matrix(buf, &image.matrix);
        buf.write(b" cm ");
        SimpleEncoder::write_to(&name, buf);
        buf.write(b" Do");
        self.close_scope(buf);
    }

    /// `q <state> <matrix> cm /<form> Do Q`
    pub fn process_form(&mut self, buf: &mut dyn Writer, form: &FormObject) {
        if form.matrix.is_degenerate() {
            log::warn!("Skipping form {} with degenerate matrix {:?}", form.form, form.matrix);
            return;
        }
        let name = self.interner.xobject(form.form, self.resources);

        self.process_graphics(buf, &form.state);
        write_matrix(buf, &form.matrix);
        buf.write(b" cm ");
        SimpleEncoder::write_to(&name, buf);
        buf.write(b" Do");
        self.close_scope(buf);
    }

    fn close_scope(&mut self, buf: &mut dyn Writer) {
        buf.write(b" Q\n");
        self.state.restore();
    }
}

fn write_state_op(buf: &mut dyn Writer, op: &StateOp) {
    match op {
        StateOp::FillColor(color) => {
            write_color(buf, color);
            buf.write(b"rg ");
        }
        StateOp::StrokeColor(color) => {
            write_color(buf, color);
            buf.write(b"RG ");
        }
        StateOp::LineWidth(width) => {
            write_real(buf, *width);
            buf.write(b" w ");
        }
        StateOp::LineCap(cap) => {
            buf.write((*cap as u8).to_string().as_bytes());
            buf.write(b" J ");
        }
        StateOp::LineJoin(join) => {
            buf.write((*join as u8).to_string().as_bytes());
            buf.write(b" j ");
        }
        StateOp::Dash(array, phase) => {
            let array = Array::from_reals(array);
            SimpleEncoder::write_to(&array, buf);
            buf.write(b" ");
            write_real(buf, *phase);
            buf.write(b" d ");
        }
    }
}

fn write_color(buf: &mut dyn Writer, color: &[u8; 3]) {
    for &component in color {
        write_color_component(buf, component);
        buf.write(b" ");
    }
}

/// Every sub-path followed by `W n` or `W* n`. An empty sub-path clips
/// everything away.
fn write_clip_path(buf: &mut dyn Writer, clip_path: &ClipPath) {
    for (path, fill_rule) in clip_path.paths() {
        if path.is_empty() {
            buf.write(b"0 0 0 0 re W* n ");
            continue;
        }
        write_path(buf, path);
        match fill_rule {
            FillRule::Winding => buf.write(b" W n "),
            FillRule::EvenOdd => buf.write(b" W* n "),
        }
    }
}

/// `a b c d e f`
pub fn write_matrix(buf: &mut dyn Writer, matrix: &Matrix) {
    for (i, value) in matrix.as_array().iter().enumerate() {
        if i != 0 {
            buf.write(b" ");
        }
        write_real(buf, *value);
    }
}

/// Path construction operators without a paint operator and without
/// surrounding whitespace. Axis aligned rectangles are written with `re`.
pub fn write_path(buf: &mut dyn Writer, path: &Path) {
    if let Some((origin, size)) = path.rect() {
        for value in [origin.x, origin.y, size.x, size.y] {
            write_real(buf, value);
            buf.write(b" ");
        }
        buf.write(b"re");
        return;
    }

    let points = path.points();
    let mut i = 0;
    while i < points.len() {
        if i != 0 {
            buf.write(b" ");
        }
        let point = &points[i];
        match point.kind {
            PointKind::Move | PointKind::Line => {
                write_real(buf, point.point.x);
                buf.write(b" ");
                write_real(buf, point.point.y);
                buf.write(if point.kind == PointKind::Move { b" m" } else { b" l" });
            }
            PointKind::Bezier => {
                let Some(run) = points.get(i..i + 3) else {
                    log::warn!("Bezier segment with less than three points, closing path");
                    buf.write(b"h");
                    break;
                };
                if run.iter().any(|p| p.kind != PointKind::Bezier) {
                    log::warn!("Bezier segment interrupted, closing path");
                    buf.write(b"h");
                    break;
                }
                for (j, p) in run.iter().enumerate() {
                    if j != 0 {
                        buf.write(b" ");
                    }
                    write_real(buf, p.point.x);
                    buf.write(b" ");
                    write_real(buf, p.point.y);
                }
                buf.write(b" c");
                i += 2;
            }
        }
        if points[i].close {
            buf.write(b" h");
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::{
        font::{FontId, FontObject},
        geometry::Point,
        page_object::{Color, LineCap, LineJoin},
        pdf::{Name, Object},
        resource::MemoryStore,
    };

    fn written(f: impl FnOnce(&mut dyn Writer)) -> String {
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[test]
    fn matrix_text() {
        let text = written(|buf| write_matrix(buf, &Matrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)));
        assert_eq!(text, "1 0 0 1 0 0");
        let text = written(|buf| write_matrix(buf, &Matrix::new(0.5, 0.0, 0.0, 2.5, -3.25, 1e7)));
        assert_eq!(text, ".5 0 0 2.5 -3.25 10000000");
    }

    #[test]
    fn open_path_points() {
        let mut path = Path::new();
        path.append_point(Point::new(1.0, 2.0), PointKind::Move);
        path.append_point(Point::new(3.0, 4.0), PointKind::Line);
        path.append_point_and_close(Point::new(5.0, 6.0), PointKind::Line);
        assert_eq!(written(|buf| write_path(buf, &path)), "1 2 m 3 4 l 5 6 l h");
    }

    #[test]
    fn short_bezier_run_closes_path() {
        let mut path = Path::new();
        path.append_point(Point::new(0.0, 0.0), PointKind::Move);
        path.append_point(Point::new(1.0, 1.0), PointKind::Bezier);
        path.append_point(Point::new(2.0, 2.0), PointKind::Bezier);
        assert_eq!(written(|buf| write_path(buf, &path)), "0 0 m h");

        let mut path = Path::new();
        path.append_point(Point::new(0.0, 0.0), PointKind::Move);
        path.append_point(Point::new(1.0, 1.0), PointKind::Bezier);
        path.append_point(Point::new(2.0, 2.0), PointKind::Line);
        path.append_point(Point::new(3.0, 3.0), PointKind::Bezier);
        assert_eq!(written(|buf| write_path(buf, &path)), "0 0 m h");
    }

    #[test]
    fn line_state_operators() {
        let mut resources = Dictionary::new();
        let mut interner = ResourceInterner::new();
        let mut store = MemoryStore::new();
        let mut state = StateTracker::new();
        let mut emitter = Emitter {
            resources: &mut resources,
            interner: &mut interner,
            store: &mut store,
            state: &mut state,
        };

        let mut path = PathObject::new(Path::new());
        path.stroke = true;
        path.state.color.stroke = Some(Color::rgb(0.0, 0.0, 1.0));
        path.state.graph.line_width = 2.0;
        path.state.graph.line_cap = LineCap::Round;
        path.state.graph.line_join = LineJoin::Bevel;
        path.state.graph.dash_array = vec![3.0, 1.5];
        path.state.graph.dash_phase = 0.5;

        let text = written(|buf| emitter.process_path(buf, &path));
        assert_eq!(text, "q 0 0 1 RG 2 w 1 J 2 j [3 1.5] .5 d 1 0 0 1 0 0 cm S Q\n");
        assert_eq!(emitter.state.depth(), 0);
    }

    #[test]
    fn clip_is_written_before_graphics_state() {
        let mut resources = Dictionary::new();
        let mut interner = ResourceInterner::new();
        let mut store = MemoryStore::new();
        let mut state = StateTracker::new();
        let mut emitter = Emitter {
            resources: &mut resources,
            interner: &mut interner,
            store: &mut store,
            state: &mut state,
        };

        let mut clip = ClipPath::new();
        let mut rect = Path::new();
        rect.append_rect(0.0, 0.0, 10.0, 10.0);
        clip.append_path(rect, FillRule::Winding);
        clip.append_path(Path::new(), FillRule::Winding);

        let mut path = PathObject::new(Path::new());
        path.fill = Some(FillRule::Winding);
        path.state.clip_path = Some(clip);
        path.state.general.fill_alpha = 0.5;

        let text = written(|buf| emitter.process_path(buf, &path));
        assert_eq!(
            text,
            "q 0 0 10 10 re W n 0 0 0 0 re W* n /FXE1 gs 1 0 0 1 0 0 cm f Q\n"
        );
    }

    #[test]
    fn images_and_forms() {
        let mut resources = Dictionary::new();
        let mut interner = ResourceInterner::new();
        let mut store = MemoryStore::new();
        let image_stream = store.new_indirect(Object::Null);
        let form_stream = store.new_indirect(Object::Null);
        let mut state = StateTracker::new();
        let mut emitter = Emitter {
            resources: &mut resources,
            interner: &mut interner,
            store: &mut store,
            state: &mut state,
        };

        let image = ImageObject::new(image_stream, Matrix::new(100.0, 0.0, 0.0, 50.0, 10.0, 20.0));
        let mut form = FormObject::new(form_stream, Matrix::translate(5.0, 5.0));
        form.state.color.fill = Some(Color::rgb(1.0, 0.0, 0.0));
        let flat = ImageObject::new(image_stream, Matrix::new(0.0, 0.0, 0.0, 50.0, 0.0, 0.0));

        let text = written(|buf| {
            emitter.process_object(buf, &PageObject::from(image));
            emitter.process_object(buf, &PageObject::from(form));
            emitter.process_object(buf, &PageObject::from(flat));
        });
        assert_eq!(
            text,
            "q 100 0 0 50 10 20 cm /FXX1 Do Q\nq 1 0 0 rg 1 0 0 1 5 5 cm /FXX2 Do Q\n"
        );
        let xobjects = resources.get(b"XObject").and_then(Object::dictionary).expect("xobject resources");
        assert_eq!(xobjects.get(b"FXX1"), Some(&Object::Reference(image_stream)));
        assert_eq!(xobjects.get(b"FXX2"), Some(&Object::Reference(form_stream)));
    }

    /// Font whose encoding is plain bytes, so text can stay a literal string.
    struct LatinFont(FontId);

    impl Font for LatinFont {
        fn resource_identity(&self) -> FontId {
            self.0
        }

        fn base_font_name(&self) -> &str {
            "Courier"
        }

        fn encode_text(&self, text: &str) -> Vec<u8> {
            text.as_bytes().to_vec()
        }

        fn literal_safe(&self) -> bool {
            true
        }

        fn font_object(&self) -> FontObject {
            FontObject::Direct(Dictionary::new())
        }
    }

    #[test]
    fn literal_safe_text() {
        let mut resources = Dictionary::new();
        let mut interner = ResourceInterner::new();
        let mut store = MemoryStore::new();
        let mut state = StateTracker::new();
        let mut emitter = Emitter {
            resources: &mut resources,
            interner: &mut interner,
            store: &mut store,
            state: &mut state,
        };

        let font: Rc<dyn Font> = Rc::new(LatinFont(FontId::next()));
        let text = TextObject::new("f(x", font.clone(), 12.0);
        let balanced = TextObject::new("g(y)", font, 12.0);
        let out = written(|buf| {
            emitter.process_text(buf, &text);
            emitter.process_text(buf, &balanced);
        });
        assert_eq!(
            out,
            "q BT 1 0 0 1 0 0 Tm /FXF1 12 Tf 0 Tr (f\\(x) Tj ET Q\n\
             q BT 1 0 0 1 0 0 Tm /FXF1 12 Tf 0 Tr (g(y)) Tj ET Q\n"
        );
    }

    #[test]
    fn name_is_escaped() {
        let text = written(|buf| SimpleEncoder::write_to(&Name::from_str("A B"), buf));
        assert_eq!(text, "/A#20B");
    }
}
