/// Append-only byte sink the encoders and the content generator write into.
pub trait Writer {
    fn write(&mut self, buf: &[u8]);
}

impl Writer for Vec<u8> {
    fn write(&mut self, buf: &[u8]) {
        self.extend(buf);
    }
}

/// Writer that only counts bytes. Used to compute encoded lengths without
/// allocating.
#[derive(Debug, Default)]
pub(crate) struct CountingWriter(pub(crate) usize);

impl Writer for CountingWriter {
    fn write(&mut self, buf: &[u8]) {
        self.0 += buf.len();
    }
}

pub trait Encoder<T: ?Sized> {
    fn encoded_len(o: &T) -> usize {
        let mut counter = CountingWriter::default();
        Self::write_to(o, &mut counter);
        counter.0
    }

    fn write_to(o: &T, writer: &mut dyn Writer);
}
