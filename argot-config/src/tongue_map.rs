//! Insertion-ordered string map used for tongue and font assignments.
//!
//! The persisted `Languages` setting maps language keys to font keys, and
//! the order of its entries is the order the settings form displays its
//! rows in. Plain hash maps lose that order and tree maps re-sort it, so
//! this module keeps entries in a `Vec` and serializes them as a mapping
//! whose entry order is the insertion order. Deserialization preserves
//! document order the same way.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An insertion-ordered mapping from string key to string value.
///
/// Lookups are linear; the maps involved here hold a few dozen in-game
/// languages at most, well below the point where an index would pay off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TongueMap {
    entries: Vec<(String, String)>,
}

impl TongueMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a key/value pair.
    ///
    /// If the key already exists its value is replaced in place and the old
    /// value returned; the key keeps its original position. New keys are
    /// appended at the end.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(std::mem::replace(existing, value))
        } else {
            self.entries.push((key, value));
            None
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overwrite values positionally: the Nth supplied value replaces the
    /// Nth entry's value, in insertion order.
    ///
    /// This is the merge the settings form performs when the submitted font
    /// choices are zipped back into the stored language mapping. Assignment
    /// stops at the shorter of the two sequences: extra supplied values are
    /// ignored and entries past the supplied list keep their values.
    /// Returns the number of entries overwritten.
    pub fn assign_in_order<I, S>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut assigned = 0;
        for (slot, value) in self.entries.iter_mut().zip(values) {
            slot.1 = value.into();
            assigned += 1;
        }
        assigned
    }
}

impl FromIterator<(String, String)> for TongueMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a TongueMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for TongueMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TongueMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TongueMapVisitor;

        impl<'de> Visitor<'de> for TongueMapVisitor {
            type Value = TongueMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping of string keys to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = TongueMap::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    // Duplicate keys keep their first position, last value wins.
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(TongueMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TongueMap {
        let mut map = TongueMap::new();
        map.insert("common", "Signika");
        map.insert("elvish", "Tengwar");
        map.insert("dwarvish", "Dethek");
        map
    }

    #[test]
    fn insert_preserves_order() {
        let map = sample();
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["common", "elvish", "dwarvish"]);
    }

    #[test]
    fn insert_existing_key_keeps_position() {
        let mut map = sample();
        let old = map.insert("elvish", "Espruar");
        assert_eq!(old.as_deref(), Some("Tengwar"));
        let entries: Vec<_> = map.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("common", "Signika"),
                ("elvish", "Espruar"),
                ("dwarvish", "Dethek"),
            ]
        );
    }

    #[test]
    fn assign_in_order_overwrites_positionally() {
        let mut map = sample();
        let assigned = map.assign_in_order(["A", "B", "C"]);
        assert_eq!(assigned, 3);
        let values: Vec<_> = map.values().collect();
        assert_eq!(values, vec!["A", "B", "C"]);
        // Keys are untouched.
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["common", "elvish", "dwarvish"]);
    }

    #[test]
    fn assign_in_order_stops_at_shorter_input() {
        let mut map = sample();
        assert_eq!(map.assign_in_order(["A"]), 1);
        let values: Vec<_> = map.values().collect();
        assert_eq!(values, vec!["A", "Tengwar", "Dethek"]);

        // Extra supplied values are ignored.
        assert_eq!(map.assign_in_order(["X", "Y", "Z", "extra"]), 3);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn yaml_round_trip_preserves_order() {
        let map = sample();
        let yaml = serde_yaml_ng::to_string(&map).unwrap();
        // Serialized entry order is the insertion order.
        let common = yaml.find("common").unwrap();
        let elvish = yaml.find("elvish").unwrap();
        let dwarvish = yaml.find("dwarvish").unwrap();
        assert!(common < elvish && elvish < dwarvish);

        let back: TongueMap = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn deserialization_preserves_document_order() {
        let yaml = "zeta: one\nalpha: two\nmid: three\n";
        let map: TongueMap = serde_yaml_ng::from_str(yaml).unwrap();
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
