//! Name classification. Directories match against a fixed lookup table
//! ([`dirs`]), files against an ordered list of regex rules ([`files`]).
//! Both classifiers take the corpus-wide occurrence count of the name,
//! so they can only run after the frequency survey is complete.

pub mod dirs;
pub mod files;

/// Names seen fewer times than this across the corpus are noise and are
/// left out of the grouped report entirely.
pub const DEFAULT_MIN_OCCURRENCES: u64 = 2;
