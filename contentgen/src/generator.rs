//! Content stream generation for a page or form.

use crate::{
    content::{ContentMode, GeneratorConfig, ObjectHolder, ParseState, StreamFilter},
    emitter::Emitter,
    error::ContentError,
    pdf::{clear_filters, Dictionary, Name, Object, Stream, K_FILTER, K_LENGTH},
    resource::ObjectStore,
    state::StateTracker,
    writer::Writer,
};

const FLATE_DECODE: &str = "FlateDecode";

pub struct ContentGenerator<'a> {
    holder: &'a mut ObjectHolder,
    store: &'a mut dyn ObjectStore,
    config: GeneratorConfig,
    state: StateTracker,
}

impl<'a> ContentGenerator<'a> {
    pub fn new(holder: &'a mut ObjectHolder, store: &'a mut dyn ObjectStore) -> Self {
        Self::with_config(holder, store, GeneratorConfig::default())
    }

    pub fn with_config(holder: &'a mut ObjectHolder, store: &'a mut dyn ObjectStore, config: GeneratorConfig) -> Self {
        Self {
            holder,
            store,
            config,
            state: StateTracker::new(),
        }
    }

    /// Write all objects of the holder in painting order. Resources the
    /// objects use are registered in the holder's resource dictionary.
    pub fn process_page_objects(&mut self, buf: &mut dyn Writer) {
        self.write_objects(buf, false);
    }

    /// Replace the holder's content stream according to the configured mode
    /// and mark every object as part of it.
    pub fn generate_content(&mut self) -> Result<(), ContentError> {
        if self.holder.parse_state != ParseState::Parsed {
            log::warn!("Refusing to generate content for a holder that is not parsed");
            return Err(ContentError::NotParsed);
        }

        let mut buf = Vec::new();
        match self.config.mode {
            ContentMode::Regenerate => self.write_objects(&mut buf, false),
            ContentMode::Append => {
                let existing = self.existing_content()?;
                if !existing.is_empty() {
                    buf.write(b"q\n");
                    buf.write(&existing);
                    buf.write(b"\nQ\n");
                }
                self.write_objects(&mut buf, true);
            }
        }
        for object in self.holder.objects.iter_mut() {
            object.mark_emitted();
        }

        let mut dictionary = self
            .holder
            .contents
            .take()
            .map(|stream| stream.dictionary)
            .unwrap_or_else(Dictionary::new);
        clear_filters(&mut dictionary);
        let data = match self.config.filter {
            StreamFilter::None => buf,
            StreamFilter::Flate => {
                dictionary.insert(Name::from(K_FILTER), Object::from(Name::from_str(FLATE_DECODE)));
                deflate(&buf)?
            }
        };
        let length = i32::try_from(data.len()).unwrap_or(i32::MAX);
        dictionary.insert(Name::from(K_LENGTH), Object::Integer(length));
        log::debug!(
            "Generated {} bytes of {:?} content for {:?}",
            data.len(),
            self.config.mode,
            self.holder.kind
        );
        self.holder.contents = Some(Stream::new(dictionary, data));
        Ok(())
    }

    fn write_objects(&mut self, buf: &mut dyn Writer, only_new: bool) {
        self.state.reset();
        let holder = &mut *self.holder;
        let mut emitter = Emitter {
            resources: &mut holder.resources,
            interner: &mut holder.interner,
            store: &mut *self.store,
            state: &mut self.state,
        };
        for object in holder.objects.iter().filter(|object| !only_new || !object.is_emitted()) {
            emitter.process_object(buf, object);
        }
    }

    /// Decoded data of the stored content stream, empty if there is none.
    fn existing_content(&self) -> Result<Vec<u8>, ContentError> {
        let stream = match &self.holder.contents {
            Some(stream) => stream,
            None => return Ok(Vec::new()),
        };
        let filters = stream
            .filters()
            .map_err(|entry| ContentError::UnsupportedFilter(entry.to_string()))?;
        match filters.as_slice() {
            [] => Ok(stream.data.to_vec()),
            [filter] if filter.as_bytes() == FLATE_DECODE.as_bytes() => Ok(inflate(&stream.data)?),
            chain => {
                let names: Vec<String> = chain.iter().map(|name| name.to_string()).collect();
                Err(ContentError::UnsupportedFilter(names.join(" ")))
            }
        }
    }
}

fn deflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use std::io::Write;

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

fn inflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use std::io::Read;

    let mut decoded = Vec::new();
    flate2::read::ZlibDecoder::new(data).read_to_end(&mut decoded)?;
    Ok(decoded)
}
