use serde::{Deserialize, Serialize};
use std::fmt;

/// Who makes South's calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mode {
    /// The user bids for South.
    #[default]
    Interactive,
    /// The engine makes every call.
    Automatic,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Interactive => Mode::Automatic,
            Mode::Automatic => Mode::Interactive,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Interactive => f.write_str("interactive"),
            Mode::Automatic => f.write_str("automatic"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub mode: Mode,
    /// Print the description of every constructive call as it is made.
    #[serde(default)]
    pub display_meaning_of_bids: bool,
    /// List the description of each legal bid before the user chooses.
    #[serde(default)]
    pub display_meaning_of_possible_bids: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.mode, Mode::Interactive);
        assert!(!settings.display_meaning_of_bids);
        assert!(!settings.display_meaning_of_possible_bids);
    }

    #[test]
    fn test_partial_yaml() {
        let settings: Settings = serde_yaml::from_str("mode: Automatic\n").unwrap();
        assert_eq!(settings.mode, Mode::Automatic);
        assert_eq!(settings.mode.toggled(), Mode::Interactive);
    }
}
