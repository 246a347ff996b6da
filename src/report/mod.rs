//! Report renderers for corpus analysis results.
//!
//! - [`text`]: tab-separated listing rendered to a `String`, one line
//!   per group or name; byte-identical across runs, meant for diffing
//!   and piping.
//! - [`table`]: human-oriented table view of the same data.

pub mod table;
pub mod text;

/// Which report sections to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Directories,
    Files,
    Both,
}

impl Section {
    pub fn dirs(&self) -> bool {
        matches!(self, Section::Directories | Section::Both)
    }

    pub fn files(&self) -> bool {
        matches!(self, Section::Files | Section::Both)
    }
}
