use crate::error::{Error, Result};
use crate::platform::{CharacterSet, ALL_FORBIDDEN};
use crate::transliterate::is_printable_ascii;
use std::collections::BTreeMap;

/// Replacement strings for forbidden characters.
///
/// `Some("")` deletes the character, `None` (or no entry) leaves it alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionSpec {
    replacements: BTreeMap<char, Option<String>>,
}

fn default_replacement(ch: char) -> Option<&'static str> {
    match ch {
        ':' => Some(";"),
        '"' => Some("'"),
        '/' | '\\' | '|' => Some("-"),
        '<' => Some("(lt)"),
        '>' => Some("(gt)"),
        '?' => Some("(q)"),
        '*' => Some("^"),
        _ => None,
    }
}

impl Default for SubstitutionSpec {
    fn default() -> Self {
        let replacements = ALL_FORBIDDEN
            .iter()
            .map(|&c| (c, default_replacement(c).map(str::to_string)))
            .collect();
        SubstitutionSpec { replacements }
    }
}

impl SubstitutionSpec {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        SubstitutionSpec { replacements: BTreeMap::new() }
    }

    pub fn set(&mut self, ch: char, replacement: Option<String>) -> &mut Self {
        self.replacements.insert(ch, replacement);
        self
    }

    pub fn with(mut self, ch: char, replacement: Option<&str>) -> Self {
        self.set(ch, replacement.map(str::to_string));
        self
    }

    pub fn get(&self, ch: char) -> Option<&str> {
        self.replacements.get(&ch).and_then(|r| r.as_deref())
    }

    /// Checks every non-empty replacement for `platform`'s forbidden characters.
    pub fn validate(&self, platform: CharacterSet, ascii_only: bool) -> Result<()> {
        for &ch in platform.forbidden() {
            let replacement = match self.get(ch) {
                Some(r) if !r.is_empty() => r,
                _ => continue,
            };
            if replacement.chars().any(|c| platform.is_forbidden(c)) {
                return Err(Error::ConflictingReplacement {
                    source_char: ch,
                    replacement: replacement.to_string(),
                });
            }
            if ascii_only && !replacement.is_ascii() {
                return Err(Error::NonAsciiReplacement {
                    source_char: ch,
                    replacement: replacement.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Replaces `platform`'s forbidden characters in `s` according to `replacements`.
///
/// The table is validated first, so nothing is transformed when it is
/// inconsistent. Non-printable characters are stripped from the result.
pub fn compatibility_substitution(
    s: &str,
    platform: CharacterSet,
    ascii_only: bool,
    replacements: &SubstitutionSpec,
) -> Result<String> {
    replacements.validate(platform, ascii_only)?;
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match replacements.get(ch) {
            Some(r) if platform.is_forbidden(ch) => out.push_str(r),
            _ => out.push(ch),
        }
    }
    if ascii_only {
        out.retain(is_printable_ascii);
    } else {
        out.retain(|c| !c.is_control() || c.is_ascii_whitespace());
    }
    Ok(out)
}
