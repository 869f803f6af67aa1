//! Normalizes file and directory names into portable ASCII.
//!
//! The core is read-only: [`scan`] walks a tree and returns a [`ProposalSet`]
//! of `(original, proposed)` paths. Names are transliterated to printable
//! ASCII and, when a [`CharacterSet`] is chosen, that platform's forbidden
//! characters are substituted. [`renamer::apply`] executes a plan leaves-first.

pub mod config;
pub mod error;
pub mod platform;
pub mod proposal;
pub mod renamer;
pub mod scanner;
pub mod substitution;
pub mod transliterate;
pub mod util;

#[cfg(test)]
mod test_support;

pub use error::{Error, Result};
pub use platform::CharacterSet;
pub use proposal::{normalize_name, propose, propose_with, Proposal, ProposalSet};
pub use renamer::{apply, find_collisions, Collision, RenameReport, SkipReason};
pub use scanner::{scan, scan_with, ScanOptions};
pub use substitution::{compatibility_substitution, SubstitutionSpec};
pub use transliterate::ascii_equivalent;
