use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Alert annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub name: String,
    pub value: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub is_link: bool,
}

fn default_visible() -> bool {
    true
}

impl Annotation {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        let is_link = is_link_value(&value);
        Self {
            name: name.into(),
            value,
            visible: true,
            is_link,
        }
    }

    /// Builds a name-sorted annotation list from a plain map
    pub fn from_map(map: &HashMap<String, String>) -> Vec<Annotation> {
        let mut annotations: Vec<Annotation> = map
            .iter()
            .map(|(name, value)| Annotation::new(name.clone(), value.clone()))
            .collect();
        annotations.sort_by(|a, b| a.name.cmp(&b.name));
        annotations
    }
}

fn is_link_value(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
