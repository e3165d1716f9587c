//! Insertion-ordered mapping from alias domain to generated queries.
//!
//! Key order follows first occurrence of each alias domain in the input;
//! a recurring domain reuses its existing key. BTreeMap would reorder the
//! keys, so we keep a small Vec-backed map and serialize it by hand.

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: Vec<(String, Vec<String>)>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one query string under `domain`, creating the list on first
    /// use. Linear scan; alias lists are small.
    pub fn push(&mut self, domain: &str, query: String) {
        match self.entries.iter_mut().find(|(d, _)| d == domain) {
            Some((_, queries)) => queries.push(query),
            None => self.entries.push((domain.to_string(), vec![query])),
        }
    }

    pub fn get(&self, domain: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(d, _)| d == domain)
            .map(|(_, queries)| queries.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(d, queries)| (d.as_str(), queries.as_slice()))
    }
}

impl Serialize for AliasMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (domain, queries) in &self.entries {
            map.serialize_entry(domain, queries)?;
        }
        map.end()
    }
}
