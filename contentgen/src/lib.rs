pub use content::{ContentMode, GeneratorConfig, HolderKind, ObjectHolder, ParseState, StreamFilter};
pub use error::ContentError;
pub use generator::ContentGenerator;
pub use resource::{MemoryStore, ObjectStore};
pub use simple_encode::SimpleEncoder;

mod content;
pub mod emitter;
mod error;
pub mod font;
mod generator;
pub mod geometry;
pub mod number;
pub mod page_object;
pub mod pdf;
pub mod render_options;
pub mod resource;
pub mod simple_encode;
pub mod state;
pub mod writer;

/// Replace the content stream of `holder` with one written from its page
/// objects.
///
/// Fails if the holder is not parsed yet, or if appending to content stored
/// with an unsupported filter.
pub fn generate_content(
    holder: &mut ObjectHolder,
    store: &mut dyn ObjectStore,
    config: GeneratorConfig,
) -> Result<(), ContentError> {
    ContentGenerator::with_config(holder, store, config).generate_content()
}
