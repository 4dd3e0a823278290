use crate::{
    pdf::Name,
    writer::{Encoder, Writer},
};

use super::SimpleEncoder;

fn is_delimiter(chr: u8) -> bool {
    matches!(
        chr,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

/// Characters that can appear in a name without `#xx` escaping.
fn is_regular(chr: u8) -> bool {
    chr > b' ' && chr < 0x7f && chr != b'#' && !is_delimiter(chr)
}

impl Encoder<Name> for SimpleEncoder {
    fn write_to(name: &Name, writer: &mut dyn Writer) {
        writer.write(b"/");
        let mut rest = name.as_bytes();
        while let Some(split) = rest.iter().position(|&c| !is_regular(c)) {
            writer.write(&rest[..split]);
            writer.write(b"#");
            writer.write(hex::encode_upper([rest[split]]).as_bytes());
            rest = &rest[split + 1..];
        }
        writer.write(rest);
    }
}
