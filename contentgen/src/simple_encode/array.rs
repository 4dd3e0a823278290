use crate::{
    pdf::Array,
    writer::{Encoder, Writer},
};

use super::SimpleEncoder;

impl Encoder<Array> for SimpleEncoder {
    fn write_to(array: &Array, writer: &mut dyn Writer) {
        writer.write(b"[");
        let mut items = array.iter();
        if let Some(first) = items.next() {
            Self::write_to(first, writer);
            for item in items {
                writer.write(b" ");
                Self::write_to(item, writer);
            }
        }
        writer.write(b"]");
    }
}

#[cfg(test)]
mod tests {
    use crate::pdf::{Name, Object};

    use super::*;

    fn encode(array: &Array) -> String {
        let mut out = Vec::new();
        SimpleEncoder::write_to(array, &mut out);
        assert_eq!(SimpleEncoder::encoded_len(array), out.len());
        String::from_utf8_lossy(&out).into_owned()
    }

    #[test]
    fn solid_line_dash() {
        assert_eq!(encode(&Array::new()), "[]");
    }

    #[test]
    fn dash_pattern() {
        assert_eq!(encode(&Array::from_reals(&[3.0, 1.5, 0.25])), "[3 1.5 .25]");
    }

    #[test]
    fn mixed_items() {
        let mut array = Array::new();
        array.push(Name::from_str("PDF"));
        array.push(Name::from_str("Text"));
        array.push(Object::Integer(0));
        assert_eq!(encode(&array), "[/PDF /Text 0]");
    }

    #[test]
    fn nested() {
        let array = Array::from(vec![Object::from(vec![Object::Null]), Object::Bool(true)]);
        assert_eq!(encode(&array), "[[null] true]");
    }
}
