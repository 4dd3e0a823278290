use crate::{
    pdf::Dictionary,
    writer::{Encoder, Writer},
};

use super::SimpleEncoder;

impl Encoder<Dictionary> for SimpleEncoder {
    fn write_to(dict: &Dictionary, writer: &mut dyn Writer) {
        writer.write(b"<<");
        for (index, (key, value)) in dict.iter().enumerate() {
            if index > 0 {
                writer.write(b" ");
            }
            Self::write_to(key, writer);
            writer.write(b" ");
            Self::write_to(value, writer);
        }
        writer.write(b">>");
    }
}
