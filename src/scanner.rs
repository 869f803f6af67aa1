//! Tree scanning: walks a file or directory and collects rename proposals.
//!
//! Directories are visited top-down in name order. For each visited
//! directory its files are proposed first, then its subdirectories.
//! Nothing on disk is touched.

use crate::error::{Error, Result};
use crate::platform::CharacterSet;
use crate::proposal::{propose_with, Proposal, ProposalSet};
use crate::substitution::SubstitutionSpec;
use std::ffi::{OsStr, OsString};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Options controlling a scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub platform: Option<CharacterSet>,
    /// Propose renames for directories as well as files.
    pub include_dirs: bool,
    /// Descend past the first directory level.
    pub recursive: bool,
    pub replacements: SubstitutionSpec,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            platform: None,
            include_dirs: true,
            recursive: true,
            replacements: SubstitutionSpec::default(),
        }
    }
}

/// Scans `path` with the default replacement table.
pub fn scan(
    path: &Path,
    platform: Option<CharacterSet>,
    include_dirs: bool,
    recursive: bool,
) -> Result<ProposalSet> {
    let opts = ScanOptions { platform, include_dirs, recursive, ..ScanOptions::default() };
    scan_with(path, &opts)
}

pub fn scan_with(path: &Path, opts: &ScanOptions) -> Result<ProposalSet> {
    let root = strip_trailing_separators(path);
    if !root.exists() {
        return Err(Error::PathNotFound(root));
    }
    let mut set = ProposalSet::default();

    if !root.is_dir() {
        if let Some(p) = propose_entry(&root, opts)? {
            set.files.push(p);
        }
        return Ok(set);
    }

    if opts.include_dirs {
        if let Some(p) = propose_entry(&root, opts)? {
            set.dirs.push(p);
        }
    }

    // Children grouped under their parent, in the order directories are entered.
    let mut groups: Vec<(PathBuf, Vec<(OsString, bool)>)> = Vec::new();
    let mut group_of: HashMap<PathBuf, usize> = HashMap::new();
    let max_depth = if opts.recursive { usize::MAX } else { 1 };
    for entry in WalkDir::new(&root).max_depth(max_depth).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("unreadable scan root"));
                return Err(Error::io(root, source));
            }
            Err(e) => {
                if let Some(path) = e.path() {
                    set.unreadable.push(path.to_path_buf());
                }
                continue;
            }
        };
        let is_dir = entry.file_type().is_dir();
        if is_dir {
            group_of.insert(entry.path().to_path_buf(), groups.len());
            groups.push((entry.path().to_path_buf(), Vec::new()));
        }
        if entry.depth() == 0 {
            continue;
        }
        // Symlinks are classified by their target but never descended into.
        let listed_as_dir = is_dir
            || (entry.path_is_symlink()
                && fs::metadata(entry.path()).map(|m| m.is_dir()).unwrap_or(false));
        let parent = entry.path().parent().and_then(|p| group_of.get(p));
        if let Some(&idx) = parent {
            groups[idx].1.push((entry.file_name().to_os_string(), listed_as_dir));
        }
    }

    for (dir, children) in &groups {
        propose_children(dir, children, opts, &mut set)?;
    }
    Ok(set)
}

// Proposes renames for the children of `dir`: files first, then directories.
fn propose_children(
    dir: &Path,
    children: &[(OsString, bool)],
    opts: &ScanOptions,
    set: &mut ProposalSet,
) -> Result<()> {
    for (name, _) in children.iter().filter(|(_, is_dir)| !is_dir) {
        if let Some(p) = propose_child(dir, name, opts)? {
            set.files.push(p);
        }
    }
    if opts.include_dirs {
        for (name, _) in children.iter().filter(|(_, is_dir)| *is_dir) {
            if let Some(p) = propose_child(dir, name, opts)? {
                set.dirs.push(p);
            }
        }
    }
    Ok(())
}

fn propose_entry(path: &Path, opts: &ScanOptions) -> Result<Option<Proposal>> {
    match (path.file_name(), path.parent()) {
        (Some(name), Some(parent)) => propose_child(parent, name, opts),
        (Some(name), None) => propose_child(Path::new(""), name, opts),
        // `.`, `..` and `/` have no name to change.
        (None, _) => Ok(None),
    }
}

// Names that are not valid UTF-8 are normalized lossily but keep their exact
// original path so the rename still finds them.
fn propose_child(dir: &Path, name: &OsStr, opts: &ScanOptions) -> Result<Option<Proposal>> {
    let lossy = name.to_string_lossy();
    let mut proposal = propose_with(&lossy, Some(dir), opts.platform, &opts.replacements)?;
    if let Some(p) = proposal.as_mut() {
        p.original = dir.join(name);
    }
    Ok(proposal)
}

/// Drops trailing separators (`dir/` -> `dir`); a bare root stays `/`.
fn strip_trailing_separators(path: &Path) -> PathBuf {
    path.components().collect()
}
