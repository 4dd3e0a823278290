use crate::{
    number::write_real,
    pdf::{Name, Object, Stream, K_LENGTH},
    writer::{Encoder, Writer},
};

use super::{string::write_hex_string, SimpleEncoder};

impl Encoder<Object> for SimpleEncoder {
    fn write_to(object: &Object, writer: &mut dyn Writer) {
        match object {
            Object::String(string) => Self::write_to(string, writer),
            Object::HexString(bytes) => write_hex_string(bytes, writer),
            Object::Real(value) => write_real(writer, *value),
            Object::Integer(value) => writer.write(value.to_string().as_bytes()),
            Object::Bool(value) => writer.write(value.to_string().as_bytes()),
            Object::Name(name) => Self::write_to(name, writer),
            Object::Array(array) => Self::write_to(array, writer),
            Object::Dictionary(dict) => Self::write_to(dict, writer),
            Object::Stream(stream) => Self::write_to(stream, writer),
            Object::Null => writer.write(b"null"),
            Object::Reference(reference) => writer.write(reference.to_string().as_bytes()),
        }
    }
}

/// Streams are written with a `Length` matching their data. Any stored
/// length is replaced.
impl Encoder<Stream> for SimpleEncoder {
    fn write_to(stream: &Stream, writer: &mut dyn Writer) {
        let mut dictionary = stream.dictionary.clone();
        let length = i32::try_from(stream.data.len()).unwrap_or(i32::MAX);
        dictionary.insert(Name::from(K_LENGTH), Object::from(length));
        Self::write_to(&dictionary, writer);
        writer.write(b" stream\n");
        writer.write(&stream.data);
        writer.write(b"\nendstream");
    }
}
