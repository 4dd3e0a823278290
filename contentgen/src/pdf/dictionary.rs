use super::{Name, Object};

/// Dictionary that keeps its entries in insertion order, so encoded output is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary(Vec<(Name, Object)>);

impl Dictionary {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    fn position(&self, key: &[u8]) -> Option<usize> {
        self.0.iter().position(|(k, _)| &k[..] == key)
    }

    pub fn get(&self, key: &[u8]) -> Option<&Object> {
        self.position(key).map(|i| &self.0[i].1)
    }

    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut Object> {
        self.position(key).map(move |i| &mut self.0[i].1)
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.position(key).is_some()
    }

    /// Insert or replace an entry. A replaced entry keeps its position.
    pub fn insert(&mut self, key: Name, value: Object) -> Option<Object> {
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.0[i].1, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &[u8]) -> Option<Object> {
        self.position(key).map(|i| self.0.remove(i).1)
    }

    /// Sub-dictionary stored under `key`. A missing entry, or one that is not
    /// a dictionary, is replaced by a new empty dictionary.
    pub fn get_or_create_dictionary(&mut self, key: &[u8]) -> &mut Dictionary {
        let index = match self.position(key) {
            Some(i) => i,
            None => {
                self.0.push((Name::from(key), Object::Dictionary(Dictionary::new())));
                self.0.len() - 1
            }
        };
        let slot = &mut self.0[index].1;
        if !matches!(slot, Object::Dictionary(_)) {
            log::warn!("Replacing non-dictionary entry `{}`", String::from_utf8_lossy(key));
            *slot = Object::Dictionary(Dictionary::new());
        }
        match slot {
            Object::Dictionary(d) => d,
            _ => unreachable!("entry was just made a dictionary"),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Object)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(Name, Object); N]> for Dictionary {
    fn from(entries: [(Name, Object); N]) -> Self {
        let mut dict = Dictionary::new();
        for (key, value) in entries {
            dict.insert(key, value);
        }
        dict
    }
}
