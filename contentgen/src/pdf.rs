use std::ops::Deref;

pub use self::{
    array::Array,
    dictionary::Dictionary,
    indirect::Reference,
    name::Name,
    stream::{clear_filters, Stream, K_DECODE_PARMS, K_FILTER, K_LENGTH},
    string::PdfString,
};

mod array;
mod dictionary;
mod indirect;
mod name;
mod stream;
mod string;

/// Direct objects that can appear in resources and content stream operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    String(PdfString),
    HexString(Bytes),
    Real(f32),
    Integer(i32),
    Bool(bool),
    Name(Name),
    Array(Array),
    Dictionary(Dictionary),
    Stream(Stream),
    Null,
    Reference(Reference),
}

impl Object {
    pub fn name(&self) -> Option<&Name> {
        match self {
            Object::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn dictionary(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(dict) => Some(dict),
            Object::Stream(stream) => Some(&stream.dictionary),
            _ => None,
        }
    }

    pub fn integer(&self) -> Option<i32> {
        match *self {
            Object::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// Numeric value of a real or an integer object.
    pub fn real(&self) -> Option<f32> {
        match *self {
            Object::Real(value) => Some(value),
            Object::Integer(value) => Some(value as f32),
            _ => None,
        }
    }

    pub fn reference(&self) -> Option<&Reference> {
        match self {
            Object::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Object::String(_) => "string",
            Object::HexString(_) => "hex string",
            Object::Real(_) => "real",
            Object::Integer(_) => "integer",
            Object::Bool(_) => "bool",
            Object::Name(_) => "name",
            Object::Array(_) => "array",
            Object::Dictionary(_) => "dictionary",
            Object::Stream(_) => "stream",
            Object::Null => "null",
            Object::Reference(_) => "reference",
        }
    }
}

impl std::fmt::Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.type_name())?;
        match self {
            Object::String(s) => write!(f, "{}", s)?,
            Object::HexString(bytes) => write!(f, "{} bytes", bytes.len())?,
            Object::Real(value) => write!(f, "{}", value)?,
            Object::Integer(value) => write!(f, "{}", value)?,
            Object::Bool(value) => write!(f, "{}", value)?,
            Object::Name(name) => write!(f, "/{}", name)?,
            Object::Array(array) => write!(f, "{} items", array.len())?,
            Object::Dictionary(dict) => write!(f, "{} entries", dict.len())?,
            Object::Stream(stream) => write!(f, "{} bytes", stream.data.len())?,
            Object::Null => {}
            Object::Reference(reference) => write!(f, "{}", reference)?,
        }
        f.write_str(")")
    }
}

macro_rules! object_from {
    ($($source:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$source> for Object {
                fn from(value: $source) -> Self {
                    Object::$variant(value.into())
                }
            }
        )*
    };
}

object_from! {
    bool => Bool,
    i32 => Integer,
    f32 => Real,
    PdfString => String,
    Name => Name,
    Vec<Object> => Array,
    Array => Array,
    Dictionary => Dictionary,
    Stream => Stream,
    Reference => Reference,
}

/// Raw bytes of stream data and hex strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bytes(Vec<u8>);

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}
