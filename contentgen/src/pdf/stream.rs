use super::{Bytes, Dictionary, Name, Object};

pub const K_LENGTH: &[u8] = b"Length";
pub const K_FILTER: &[u8] = b"Filter";
pub const K_DECODE_PARMS: &[u8] = b"DecodeParms";

/// Entries describing how the data is encoded. They are stale once the data
/// is replaced.
pub const FILTER_KEYS: [&[u8]; 5] = [K_FILTER, K_DECODE_PARMS, b"DL", b"FFilter", b"FDecodeParms"];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stream {
    pub dictionary: Dictionary,
    pub data: Bytes,
}

impl Stream {
    pub fn new(dictionary: Dictionary, data: Vec<u8>) -> Self {
        Self {
            dictionary,
            data: data.into(),
        }
    }

    /// Filters applied to the data, in decoding order. `/Filter` may hold a
    /// single name or an array of names. Any other entry is returned as the
    /// error.
    pub fn filters(&self) -> Result<Vec<&Name>, &Object> {
        let entry = match self.dictionary.get(K_FILTER) {
            Some(entry) => entry,
            None => return Ok(Vec::new()),
        };
        match entry {
            Object::Name(name) => Ok(vec![name]),
            Object::Array(array) => array.iter().map(|item| item.name().ok_or(entry)).collect(),
            _ => Err(entry),
        }
    }
}

/// Drop every filter related entry of `dictionary`.
pub fn clear_filters(dictionary: &mut Dictionary) {
    for key in FILTER_KEYS {
        dictionary.remove(key);
    }
}
