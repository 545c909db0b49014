use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Brightness at or below which a label background counts as dark
pub const DARK_BRIGHTNESS_THRESHOLD: i32 = 125;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

/// Color assigned to a single label name/value pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelColors {
    pub brightness: i32,
    pub background: Rgba,
}

impl LabelColors {
    pub fn is_dark(&self) -> bool {
        self.brightness <= DARK_BRIGHTNESS_THRESHOLD
    }
}

/// label name -> label value -> colors
pub type LabelsColorMap = HashMap<String, HashMap<String, LabelColors>>;
