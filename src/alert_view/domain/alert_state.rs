use serde::{Deserialize, Serialize};
use std::fmt;

/// Alert state as reported by an upstream
///
/// Unknown state strings are kept verbatim in `Other` so they survive a
/// snapshot round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlertState {
    #[default]
    Unprocessed,
    Active,
    Suppressed,
    Other(String),
}

impl AlertState {
    pub fn as_str(&self) -> &str {
        match self {
            AlertState::Unprocessed => "unprocessed",
            AlertState::Active => "active",
            AlertState::Suppressed => "suppressed",
            AlertState::Other(state) => state,
        }
    }

    /// Border class used for the row of an alert in this state
    pub fn border_class(&self) -> &'static str {
        match self {
            AlertState::Active => "border-danger",
            AlertState::Suppressed => "border-success",
            AlertState::Unprocessed => "border-secondary",
            AlertState::Other(_) => "border-default",
        }
    }

    /// Picks the most important state out of a list of per-instance states:
    /// active, then suppressed, then unprocessed.
    pub fn most_important<'a>(states: impl IntoIterator<Item = &'a AlertState>) -> AlertState {
        let mut suppressed = false;
        for state in states {
            match state {
                AlertState::Active => return AlertState::Active,
                AlertState::Suppressed => suppressed = true,
                _ => {}
            }
        }
        if suppressed {
            AlertState::Suppressed
        } else {
            AlertState::Unprocessed
        }
    }
}

impl From<String> for AlertState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "unprocessed" => AlertState::Unprocessed,
            "active" => AlertState::Active,
            "suppressed" => AlertState::Suppressed,
            _ => AlertState::Other(value),
        }
    }
}

impl From<AlertState> for String {
    fn from(state: AlertState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for AlertState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
