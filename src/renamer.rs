//! Applies a [`ProposalSet`] to the filesystem.
//!
//! Proposals are computed against the tree as it was scanned, so they are
//! executed leaves-first: every entry is renamed before the directory that
//! contains it, and each rename still uses its original coordinates.
//! Nothing is ever overwritten.

use crate::platform::CharacterSet;
use crate::proposal::{Proposal, ProposalSet};
use crate::util::is_safe_path_segment;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Several entries would end up at the same path, or the path is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub proposed: PathBuf,
    pub originals: Vec<PathBuf>,
    /// Something other than the listed originals already lives at `proposed`.
    pub target_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The proposed name is empty, `.`/`..`, or not allowed on the target platform.
    UnsafeName,
    Collision,
    /// The target appeared after the scan.
    TargetExists,
    Failed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnsafeName => f.write_str("proposed name is not a usable file name"),
            SkipReason::Collision => f.write_str("another entry maps to the same name"),
            SkipReason::TargetExists => f.write_str("target already exists"),
            SkipReason::Failed(msg) => write!(f, "rename failed: {}", msg),
        }
    }
}

#[derive(Debug, Default)]
pub struct RenameReport {
    pub renamed: Vec<Proposal>,
    pub skipped: Vec<(Proposal, SkipReason)>,
}

/// Finds proposals that share a target, or whose target is already taken.
pub fn find_collisions(set: &ProposalSet) -> Vec<Collision> {
    let mut by_target: BTreeMap<&Path, Vec<&Path>> = BTreeMap::new();
    for p in set.iter().filter(|p| is_sibling_rename(p)) {
        by_target.entry(p.proposed.as_path()).or_default().push(p.original.as_path());
    }
    let mut collisions = Vec::new();
    for (proposed, originals) in by_target {
        let target_exists = originals.iter().all(|o| occupied_by_other(o, proposed));
        if originals.len() > 1 || target_exists {
            collisions.push(Collision {
                proposed: proposed.to_path_buf(),
                originals: originals.into_iter().map(Path::to_path_buf).collect(),
                target_exists,
            });
        }
    }
    collisions
}

/// Proposals in execution order: deepest original path first, stable otherwise.
pub fn rename_order(set: &ProposalSet) -> Vec<&Proposal> {
    let mut order: Vec<&Proposal> = set.iter().collect();
    order.sort_by_key(|p| Reverse(p.original.components().count()));
    order
}

/// Renames every proposal that can be applied safely and reports the rest.
pub fn apply(set: &ProposalSet, platform: Option<CharacterSet>) -> RenameReport {
    let colliding: HashSet<PathBuf> = find_collisions(set)
        .into_iter()
        .flat_map(|c| c.originals)
        .collect();
    let mut report = RenameReport::default();
    for p in rename_order(set) {
        let reason = if !has_usable_name(p, platform) {
            Some(SkipReason::UnsafeName)
        } else if colliding.contains(&p.original) {
            Some(SkipReason::Collision)
        } else if occupied_by_other(&p.original, &p.proposed) {
            Some(SkipReason::TargetExists)
        } else {
            fs::rename(&p.original, &p.proposed)
                .err()
                .map(|e| SkipReason::Failed(e.to_string()))
        };
        match reason {
            Some(r) => report.skipped.push((p.clone(), r)),
            None => report.renamed.push(p.clone()),
        }
    }
    report
}

// An empty proposed name joins to the parent itself (`dir/`), which must never
// be treated as a sibling name.
fn is_sibling_rename(p: &Proposal) -> bool {
    p.proposed.parent() == p.original.parent()
}

fn has_usable_name(p: &Proposal, platform: Option<CharacterSet>) -> bool {
    is_sibling_rename(p) && is_safe_path_segment(&p.proposed_name(), platform)
}

// True when `target` exists and is not `original` itself. Both sides are
// inspected without following symlinks: a link pointing at its would-be
// target is a different entry, while a case-only rename on a case-insensitive
// filesystem yields the same device and inode.
fn occupied_by_other(original: &Path, target: &Path) -> bool {
    let target_md = match fs::symlink_metadata(target) {
        Ok(md) => md,
        Err(_) => return false,
    };
    match fs::symlink_metadata(original) {
        Ok(original_md) => !same_entry(&original_md, &target_md),
        Err(_) => true,
    }
}

#[cfg(unix)]
fn same_entry(a: &fs::Metadata, b: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    a.dev() == b.dev() && a.ino() == b.ino()
}

// No stable inode identity elsewhere; an existing target always counts as taken.
#[cfg(not(unix))]
fn same_entry(_a: &fs::Metadata, _b: &fs::Metadata) -> bool {
    false
}
