use crate::{
    pdf::PdfString,
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

/// Positions of parentheses without a partner. Balanced pairs don't end the
/// string and are written as they are.
fn unbalanced_parentheses(bytes: &[u8]) -> Vec<bool> {
    let mut unbalanced = vec![false; bytes.len()];
    let mut open = Vec::new();
    for (index, &byte) in bytes.iter().enumerate() {
        if byte == b'(' {
            open.push(index);
        } else if byte == b')' && open.pop().is_none() {
            unbalanced[index] = true;
        }
    }
    open.into_iter().for_each(|index| unbalanced[index] = true);
    unbalanced
}

impl Encoder<PdfString> for SimpleEncoder {
    fn write_to(string: &PdfString, writer: &mut dyn Writer) {
        let unbalanced = unbalanced_parentheses(string);
        writer.write(b"(");
        let mut start = 0;
        for (index, &byte) in string.iter().enumerate() {
            let escaped: &[u8] = match byte {
                b'\\' => br"\\",
                b'\r' => br"\r",
                b'(' if unbalanced[index] => br"\(",
                b')' if unbalanced[index] => br"\)",
                _ => continue,
            };
            writer.write(&string[start..index]);
            writer.write(escaped);
            start = index + 1;
        }
        writer.write(&string[start..]);
        writer.write(b")");
    }
}

/// Write `bytes` as an upper case hex string, `<48656C6C6F>`.
pub fn write_hex_string(bytes: &[u8], writer: &mut dyn Writer) {
    writer.write(b"<");
    writer.write(hex::encode_upper(bytes).as_bytes());
    writer.write(b">");
}
