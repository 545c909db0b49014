//! Compact label shown in the alert history panel.
use crate::alert_view::domain::{LabelColors, LabelsColorMap};

pub const BASE_CLASS: &str = "components-label";
pub const DARK_CLASS: &str = "components-label-dark";
pub const BRIGHT_CLASS: &str = "components-label-bright";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLabel {
    pub name: String,
    pub matcher: String,
    pub value: String,
}

impl HistoryLabel {
    pub fn new(
        name: impl Into<String>,
        matcher: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            matcher: matcher.into(),
            value: value.into(),
        }
    }

    /// `name` + `matcher` + `value`, or only `value` for unnamed labels
    pub fn text(&self) -> String {
        if self.name.is_empty() {
            self.value.clone()
        } else {
            format!("{}{}{}", self.name, self.matcher, self.value)
        }
    }

    pub fn colors<'a>(&self, colors: &'a LabelsColorMap) -> Option<&'a LabelColors> {
        colors.get(&self.name)?.get(&self.value)
    }

    pub fn class_names(&self, colors: &LabelsColorMap) -> Vec<&'static str> {
        let mut classes = vec![BASE_CLASS];
        match self.colors(colors) {
            Some(c) if c.is_dark() => classes.push(DARK_CLASS),
            Some(_) => classes.push(BRIGHT_CLASS),
            None => {}
        }
        classes
    }
}
