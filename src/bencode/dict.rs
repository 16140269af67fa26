use super::{BencodeValue, ByteString};
use std::collections::HashMap;
use std::fmt;

/// A bencode dictionary.
///
/// Entries keep the order in which keys first appeared. Inserting an existing
/// key replaces its value in place. Use [`Dictionary::sorted_iter`] for the
/// canonical byte-wise key order the encoder writes.
#[derive(Clone, Default)]
pub struct Dictionary {
    entries: Vec<(ByteString, BencodeValue)>,
    index: HashMap<ByteString, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<ByteString>,
        value: impl Into<BencodeValue>,
    ) -> Option<BencodeValue> {
        let key = key.into();
        let value = value.into();

        if let Some(&slot) = self.index.get(key.as_bytes()) {
            return Some(std::mem::replace(&mut self.entries[slot].1, value));
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &[u8]) -> Option<&BencodeValue> {
        let &slot = self.index.get(key)?;
        Some(&self.entries[slot].1)
    }

    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut BencodeValue> {
        let &slot = self.index.get(key)?;
        Some(&mut self.entries[slot].1)
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.index.contains_key(key)
    }

    /// Remove a key, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, key: &[u8]) -> Option<BencodeValue> {
        let slot = self.index.remove(key)?;
        let (_, value) = self.entries.remove(slot);
        for (key, _) in &self.entries[slot..] {
            if let Some(i) = self.index.get_mut(key.as_bytes()) {
                *i -= 1;
            }
        }
        Some(value)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&ByteString, &BencodeValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &ByteString> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Entries in strictly increasing byte-wise key order
    pub fn sorted_iter(&self) -> impl Iterator<Item = (&ByteString, &BencodeValue)> {
        let mut sorted: Vec<_> = self.iter().collect();
        // Keys are unique, so an unstable sort is deterministic.
        sorted.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));
        sorted.into_iter()
    }

    pub(crate) fn last_key(&self) -> Option<&ByteString> {
        self.entries.last().map(|(k, _)| k)
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key.as_bytes()) == Some(value))
    }
}

impl Eq for Dictionary {}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: Into<ByteString>,
    V: Into<BencodeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        dict.extend(iter);
        dict
    }
}

impl<K, V> Extend<(K, V)> for Dictionary
where
    K: Into<ByteString>,
    V: Into<BencodeValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Dictionary {
    type Item = (ByteString, BencodeValue);
    type IntoIter = std::vec::IntoIter<(ByteString, BencodeValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
