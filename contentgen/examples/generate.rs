use contentgen::{
    font::{Font, SimpleFont},
    geometry::{FillRule, Matrix, Path, Point, PointKind},
    page_object::{BlendMode, ClipPath, Color, PathObject, TextObject, TextRenderMode},
    writer::Encoder,
    ContentMode, GeneratorConfig, MemoryStore, ObjectHolder, SimpleEncoder, StreamFilter,
};
use std::{fs::File, io::Write, path::PathBuf, rc::Rc};
use structopt::StructOpt;

/// Build a small page and write its content stream.
#[derive(StructOpt, Debug)]
#[structopt(name = "generate")]
struct Opt {
    /// Output file
    #[structopt(short, long, parse(from_os_str))]
    output: PathBuf,

    /// Deflate the content stream
    #[structopt(short, long)]
    compress: bool,
}

fn build_page() -> ObjectHolder {
    let mut page = ObjectHolder::page();

    let mut frame = Path::new();
    frame.append_rect(36.0, 36.0, 576.0, 756.0);
    let mut border = PathObject::new(frame);
    border.stroke = true;
    border.state.color.stroke = Some(Color::rgb(0.2, 0.2, 0.2));
    border.state.graph.line_width = 2.5;
    page.append_object(border);

    let mut wave = Path::new();
    wave.append_point(Point::new(72.0, 600.0), PointKind::Move);
    wave.append_point(Point::new(150.0, 700.0), PointKind::Bezier);
    wave.append_point(Point::new(250.0, 500.0), PointKind::Bezier);
    wave.append_point(Point::new(330.0, 600.0), PointKind::Bezier);
    wave.append_point_and_close(Point::new(330.0, 520.0), PointKind::Line);
    let mut shade = PathObject::new(wave);
    shade.fill = Some(FillRule::Winding);
    shade.state.color.fill = Some(Color::rgb(0.1, 0.4, 0.8));
    shade.state.general.fill_alpha = 0.6;
    shade.state.general.blend_mode = BlendMode::Multiply;
    page.append_object(shade);

    let font: Rc<dyn Font> = Rc::new(SimpleFont::standard("Arial"));
    let mut title = TextObject::new("Generated content", font, 24.0);
    title.transform(&Matrix::translate(72.0, 720.0));
    title.render_mode = TextRenderMode::FillStroke;
    title.state.color.fill = Some(Color::rgb(0.9, 0.3, 0.1));
    let mut clip = Path::new();
    clip.append_rect(72.0, 700.0, 400.0, 760.0);
    let mut clip_path = ClipPath::new();
    clip_path.append_path(clip, FillRule::EvenOdd);
    title.state.clip_path = Some(clip_path);
    page.append_object(title);

    page
}

pub fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    log::debug!("Build page");
    let mut page = build_page();
    let mut store = MemoryStore::new();
    let config = GeneratorConfig {
        mode: ContentMode::Regenerate,
        filter: if opt.compress {
            StreamFilter::Flate
        } else {
            StreamFilter::None
        },
    };

    log::debug!("Generate content");
    if let Err(e) = contentgen::generate_content(&mut page, &mut store, config) {
        log::error!("Error while generating content: {}", e);
        return;
    }
    let contents = match page.contents() {
        Some(contents) => contents,
        None => {
            log::error!("Page has no content after generation");
            return;
        }
    };

    let mut out = Vec::<u8>::new();
    log::debug!("Encode content stream and resources");
    SimpleEncoder::write_to(contents, &mut out);
    out.extend_from_slice(b"\n");
    SimpleEncoder::write_to(page.resources(), &mut out);
    out.extend_from_slice(b"\n");
    log::info!("{} indirect objects stored", store.len());

    log::debug!("Write to file");
    let mut buffer = File::create(opt.output).expect("Could not create out file");
    buffer.write_all(&out).expect("Could not write out file");
}
