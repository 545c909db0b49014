use crate::shared::fingerprint::sha256_of;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ordered label set
///
/// Iteration order is insertion order, which for deserialized labels is the
/// order of keys in the source JSON object. Rows render labels in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels(Vec<(String, String)>);

impl Labels {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts a label, replacing the value in place if the name already exists
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    /// Keeps only labels for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|(n, _)| keep(n));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Order-independent fingerprint of the label set
    pub fn fingerprint(&self) -> String {
        let mut pairs: Vec<(&str, &str)> = self.iter().collect();
        pairs.sort();
        let parts: Vec<&str> = pairs
            .into_iter()
            .flat_map(|(name, value)| [name, value])
            .collect();
        sha256_of(&parts)
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Labels {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut labels = Labels::new();
        for (name, value) in iter {
            labels.insert(name, value);
        }
        labels
    }
}

impl Serialize for Labels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct LabelsVisitor;

impl<'de> Visitor<'de> for LabelsVisitor {
    type Value = Labels;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of label names to string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Labels, A::Error> {
        let mut labels = Labels(Vec::with_capacity(access.size_hint().unwrap_or(0)));
        while let Some((name, value)) = access.next_entry::<String, String>()? {
            labels.insert(name, value);
        }
        Ok(labels)
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Labels, E> {
        Ok(Labels::new())
    }
}

impl<'de> Deserialize<'de> for Labels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LabelsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_document_order() {
        let labels: Labels =
            serde_json::from_str(r#"{"job": "node", "alertname": "Down", "cluster": "dev"}"#)
                .unwrap();
        let names: Vec<&str> = labels.names().collect();
        assert_eq!(names, vec!["job", "alertname", "cluster"]);
    }

    #[test]
    fn test_deserialize_null_is_empty() {
        let labels: Labels = serde_json::from_str("null").unwrap();
        assert!(labels.is_empty());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut labels: Labels = [("a", "1"), ("b", "2")].into_iter().collect();
        labels.insert("a", "3");
        let pairs: Vec<(&str, &str)> = labels.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_serialize_round_trips_order() {
        let labels: Labels = [("z", "1"), ("a", "2")].into_iter().collect();
        assert_eq!(serde_json::to_string(&labels).unwrap(), r#"{"z":"1","a":"2"}"#);
    }

    #[test]
    fn test_fingerprint_ignores_order() {
        let first: Labels = [("a", "1"), ("b", "2")].into_iter().collect();
        let second: Labels = [("b", "2"), ("a", "1")].into_iter().collect();
        let third: Labels = [("a", "1"), ("b", "3")].into_iter().collect();
        assert_eq!(first.fingerprint(), second.fingerprint());
        assert_ne!(first.fingerprint(), third.fingerprint());
    }

    #[test]
    fn test_fingerprint_value_with_separators() {
        let embedded: Labels = [("alertname", "X"), ("job", "a\nk=v")].into_iter().collect();
        let split: Labels = [("alertname", "X"), ("job", "a"), ("k", "v")].into_iter().collect();
        assert_ne!(embedded.fingerprint(), split.fingerprint());

        let in_name: Labels = [("a=b", "c")].into_iter().collect();
        let in_value: Labels = [("a", "b=c")].into_iter().collect();
        assert_ne!(in_name.fingerprint(), in_value.fingerprint());
    }

    #[test]
    fn test_retain() {
        let mut labels: Labels = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        labels.retain(|name| name != "b");
        assert_eq!(labels.len(), 2);
        assert!(!labels.contains("b"));
    }
}
