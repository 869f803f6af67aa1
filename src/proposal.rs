use crate::error::Result;
use crate::platform::CharacterSet;
use crate::substitution::{compatibility_substitution, SubstitutionSpec};
use crate::transliterate::ascii_equivalent;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One suggested rename. Only built when the name actually changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Proposal {
    pub original: PathBuf,
    pub proposed: PathBuf,
}

impl Proposal {
    /// Final component of the proposed path, lossily decoded.
    pub fn proposed_name(&self) -> String {
        self.proposed
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Proposals from one scan, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProposalSet {
    pub files: Vec<Proposal>,
    pub dirs: Vec<Proposal>,
    /// Directories below the scan root whose contents could not be listed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreadable: Vec<PathBuf>,
}

impl ProposalSet {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len() + self.dirs.len()
    }

    /// Files first, then directories.
    pub fn iter(&self) -> impl Iterator<Item = &Proposal> {
        self.files.iter().chain(self.dirs.iter())
    }
}

/// Transliterates `name` and, when a platform is given, substitutes its
/// forbidden characters.
pub fn normalize_name(
    name: &str,
    platform: Option<CharacterSet>,
    replacements: &SubstitutionSpec,
) -> Result<String> {
    let ascii_name = ascii_equivalent(name);
    match platform {
        Some(p) => compatibility_substitution(&ascii_name, p, true, replacements),
        None => Ok(ascii_name),
    }
}

/// Proposal for `name` using the default replacement table.
pub fn propose(name: &str, parent: Option<&Path>, platform: Option<CharacterSet>) -> Result<Option<Proposal>> {
    propose_with(name, parent, platform, &SubstitutionSpec::default())
}

pub fn propose_with(
    name: &str,
    parent: Option<&Path>,
    platform: Option<CharacterSet>,
    replacements: &SubstitutionSpec,
) -> Result<Option<Proposal>> {
    let final_name = normalize_name(name, platform, replacements)?;
    if final_name == name {
        return Ok(None);
    }
    let (original, proposed) = match parent {
        Some(dir) => (dir.join(name), dir.join(&final_name)),
        None => (PathBuf::from(name), PathBuf::from(final_name)),
    };
    Ok(Some(Proposal { original, proposed }))
}
