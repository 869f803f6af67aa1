use crate::error::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Filesystem compatibility target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterSet {
    Windows,
    MacOs,
    Unix,
}

/// Every character forbidden by at least one platform, in table order.
pub const ALL_FORBIDDEN: [char; 9] = [':', '"', '/', '\\', '<', '>', '|', '?', '*'];

impl CharacterSet {
    pub const ALL: [CharacterSet; 3] = [CharacterSet::Windows, CharacterSet::MacOs, CharacterSet::Unix];

    /// Characters the platform's filesystem refuses in a name.
    pub fn forbidden(self) -> &'static [char] {
        match self {
            CharacterSet::Windows => &ALL_FORBIDDEN,
            CharacterSet::MacOs => &[':', '/'],
            CharacterSet::Unix => &['/'],
        }
    }

    pub fn is_forbidden(self, ch: char) -> bool {
        self.forbidden().contains(&ch)
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterSet::Windows => "windows",
            CharacterSet::MacOs => "macos",
            CharacterSet::Unix => "unix",
        }
    }
}

impl FromStr for CharacterSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CharacterSet::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidPlatform(s.to_string()))
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
