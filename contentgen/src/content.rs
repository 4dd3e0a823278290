//! Pages and forms as owners of page objects, resources and content.

use crate::{
    page_object::PageObject,
    pdf::{Dictionary, Stream},
    resource::ResourceInterner,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolderKind {
    Page,
    Form,
}

/// Progress of turning the holder's existing content into page objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseState {
    #[default]
    NotParsed,
    Parsing,
    Parsed,
}

/// How `generate_content` treats the content a holder already has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentMode {
    /// Replace the content with a stream written from all objects.
    #[default]
    Regenerate,
    /// Keep the content and add the objects that are not part of it yet.
    Append,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StreamFilter {
    #[default]
    None,
    /// Deflate the content and tag it `/Filter /FlateDecode`.
    Flate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub mode: ContentMode,
    pub filter: StreamFilter,
}

/// A page or a form: its drawable objects in painting order, its resource
/// dictionary and its stored content stream.
#[derive(Debug)]
pub struct ObjectHolder {
    pub(crate) kind: HolderKind,
    pub(crate) parse_state: ParseState,
    pub(crate) objects: Vec<PageObject>,
    pub(crate) resources: Dictionary,
    pub(crate) interner: ResourceInterner,
    pub(crate) contents: Option<Stream>,
}

impl ObjectHolder {
    fn new(kind: HolderKind, contents: Option<Stream>, resources: Dictionary) -> Self {
        Self {
            kind,
            parse_state: ParseState::Parsed,
            objects: Vec::new(),
            resources,
            interner: ResourceInterner::new(),
            contents,
        }
    }

    /// Empty page without content.
    pub fn page() -> Self {
        Self::new(HolderKind::Page, None, Dictionary::new())
    }

    /// Page with existing content and resources.
    pub fn page_with_content(contents: Stream, resources: Dictionary) -> Self {
        Self::new(HolderKind::Page, Some(contents), resources)
    }

    /// Form whose content is `stream`.
    pub fn form(stream: Stream, resources: Dictionary) -> Self {
        Self::new(HolderKind::Form, Some(stream), resources)
    }

    pub fn kind(&self) -> HolderKind {
        self.kind
    }

    pub fn parse_state(&self) -> ParseState {
        self.parse_state
    }

    pub fn set_parse_state(&mut self, parse_state: ParseState) {
        self.parse_state = parse_state;
    }

    /// Objects in painting order.
    pub fn objects(&self) -> &[PageObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [PageObject] {
        &mut self.objects
    }

    pub fn append_object(&mut self, object: impl Into<PageObject>) {
        self.objects.push(object.into());
    }

    pub fn resources(&self) -> &Dictionary {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut Dictionary {
        &mut self.resources
    }

    pub fn contents(&self) -> Option<&Stream> {
        self.contents.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::{Matrix, Path},
        page_object::{ImageObject, ObjectKind, PathObject},
        pdf::Reference,
    };

    #[test]
    fn objects_keep_their_order() {
        let mut page = ObjectHolder::page();
        page.append_object(PathObject::new(Path::new()));
        page.append_object(ImageObject::new(Reference::new(1, 0), Matrix::IDENTITY));
        let kinds: Vec<_> = page.objects().iter().map(PageObject::kind).collect();
        assert_eq!(kinds, [ObjectKind::Path, ObjectKind::Image]);
        assert_eq!(page.kind(), HolderKind::Page);
        assert!(page.contents().is_none());
    }

    #[test]
    fn form_has_content() {
        let form = ObjectHolder::form(Stream::new(Dictionary::new(), b"q Q".to_vec()), Dictionary::new());
        assert_eq!(form.kind(), HolderKind::Form);
        assert_eq!(form.parse_state(), ParseState::Parsed);
        assert_eq!(form.contents().map(|s| s.data.len()), Some(3));
    }

    #[test]
    fn default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.mode, ContentMode::Regenerate);
        assert_eq!(config.filter, StreamFilter::None);
    }
}
