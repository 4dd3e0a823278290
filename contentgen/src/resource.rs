//! Resource interning.
//!
//! Every resource used by a content stream is referenced by a short name that
//! resolves through the holder's resource dictionary. Structurally identical
//! requests get the same name back, new ones are stored in the document and
//! registered under the next free name of their kind.

use fnv::FnvHashMap;

use crate::{
    font::{Font, FontId, FontObject, SimpleFont, DEFAULT_FONT},
    page_object::{BlendMode, GeneralState},
    pdf::{Dictionary, Name, Object, Reference},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    ExtGState,
    Font,
    XObject,
}

impl ResourceKind {
    /// Key of the kind's sub-dictionary in a resource dictionary.
    pub fn key(&self) -> &'static [u8] {
        match self {
            ResourceKind::ExtGState => b"ExtGState",
            ResourceKind::Font => b"Font",
            ResourceKind::XObject => b"XObject",
        }
    }

    fn name_prefix(&self) -> &'static str {
        match self {
            ResourceKind::ExtGState => "FXE",
            ResourceKind::Font => "FXF",
            ResourceKind::XObject => "FXX",
        }
    }
}

/// Storage for indirect objects of a document.
pub trait ObjectStore {
    /// Store `object` and return a reference to it.
    fn new_indirect(&mut self, object: Object) -> Reference;

    fn get(&self, reference: &Reference) -> Option<&Object>;
}

/// Object store that keeps everything in memory. Object numbers start at 1.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Vec<Object>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectStore for MemoryStore {
    fn new_indirect(&mut self, object: Object) -> Reference {
        self.objects.push(object);
        let index = u32::try_from(self.objects.len()).unwrap_or(u32::MAX);
        Reference::new(index, 0)
    }

    fn get(&self, reference: &Reference) -> Option<&Object> {
        if reference.generation != 0 {
            return None;
        }
        let index = usize::try_from(reference.index).ok()?.checked_sub(1)?;
        self.objects.get(index)
    }
}

/// Descriptor of an extended graphics state. Alphas are compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphicsKey {
    fill_alpha: u32,
    stroke_alpha: u32,
    blend_mode: BlendMode,
}

impl GraphicsKey {
    pub fn new(general: &GeneralState) -> Self {
        // adding zero folds -0.0 into 0.0
        Self {
            fill_alpha: (general.fill_alpha + 0.0).to_bits(),
            stroke_alpha: (general.stroke_alpha + 0.0).to_bits(),
            blend_mode: general.blend_mode,
        }
    }

    pub fn fill_alpha(&self) -> f32 {
        f32::from_bits(self.fill_alpha)
    }

    pub fn stroke_alpha(&self) -> f32 {
        f32::from_bits(self.stroke_alpha)
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    /// Opaque and normal blending, the state every content stream starts with.
    pub fn is_default(&self) -> bool {
        self.fill_alpha() == 1.0 && self.stroke_alpha() == 1.0 && self.blend_mode == BlendMode::Normal
    }

    fn to_dictionary(self) -> Dictionary {
        let mut dict = Dictionary::from([
            (Name::from_str("ca"), Object::from(self.fill_alpha())),
            (Name::from_str("CA"), Object::from(self.stroke_alpha())),
        ]);
        if self.blend_mode != BlendMode::Normal {
            dict.insert(Name::from_str("BM"), Object::from(Name::from_str(self.blend_mode.name())));
        }
        dict
    }
}

/// Names handed out for the resources of one page or form.
#[derive(Debug, Default)]
pub struct ResourceInterner {
    graphics: FnvHashMap<GraphicsKey, Name>,
    fonts: FnvHashMap<FontId, Name>,
    xobjects: FnvHashMap<Reference, Name>,
    default_font: Option<SimpleFont>,
}

impl ResourceInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the `ExtGState` resource for `key`, created on first use.
    pub fn graphics_state(
        &mut self,
        key: GraphicsKey,
        resources: &mut Dictionary,
        store: &mut dyn ObjectStore,
    ) -> Name {
        if let Some(name) = self.graphics.get(&key) {
            return name.clone();
        }
        let reference = store.new_indirect(Object::from(key.to_dictionary()));
        let name = register(ResourceKind::ExtGState, reference, resources);
        log::debug!(
            "New graphics state `{}` (ca {}, CA {}, {:?})",
            name,
            key.fill_alpha(),
            key.stroke_alpha(),
            key.blend_mode()
        );
        self.graphics.insert(key, name.clone());
        name
    }

    /// Name of the `Font` resource for `font`. Fonts are told apart by their
    /// identity, not by their base font name.
    pub fn font(&mut self, font: &dyn Font, resources: &mut Dictionary, store: &mut dyn ObjectStore) -> Name {
        let id = font.resource_identity();
        if let Some(name) = self.fonts.get(&id) {
            return name.clone();
        }
        let reference = match font.font_object() {
            FontObject::Indirect(reference) => reference,
            FontObject::Direct(dict) => store.new_indirect(Object::from(dict)),
        };
        let name = register(ResourceKind::Font, reference, resources);
        log::debug!("New font `{}` for {}", name, font.base_font_name());
        self.fonts.insert(id, name.clone());
        name
    }

    /// Font for text objects that have none. All of them share one resource.
    pub fn default_font(&mut self) -> SimpleFont {
        self.default_font
            .get_or_insert_with(|| SimpleFont::standard(DEFAULT_FONT))
            .clone()
    }

    /// Name of the `XObject` resource for a stored image or form stream.
    pub fn xobject(&mut self, reference: Reference, resources: &mut Dictionary) -> Name {
        if let Some(name) = self.xobjects.get(&reference) {
            return name.clone();
        }
        let name = register(ResourceKind::XObject, reference, resources);
        log::debug!("New xobject `{}` for {}", name, reference);
        self.xobjects.insert(reference, name.clone());
        name
    }
}

/// Store `reference` under the first unused name of `kind`. Existing entries
/// are never overwritten.
///
/// Each probe scans the sub-dictionary, so this is quadratic in the number of
/// entries already there. Resource dictionaries of a page stay small.
fn register(kind: ResourceKind, reference: Reference, resources: &mut Dictionary) -> Name {
    let sub_dictionary = resources.get_or_create_dictionary(kind.key());
    let mut index = 1u32;
    let name = loop {
        let candidate = Name::numbered(kind.name_prefix(), index);
        if !sub_dictionary.contains_key(&candidate) {
            break candidate;
        }
        index += 1;
    };
    sub_dictionary.insert(name.clone(), Object::from(reference));
    name
}
