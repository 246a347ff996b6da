use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "layout-checkr",
    about = "Scan package top-level layouts and check naming-convention compliance",
    version
)]
pub struct Cli {
    /// Analysis mode: report, dirs, files, dir-names, file-names, compliance, or dump
    #[arg(value_name = "MODE")]
    pub mode: String,

    /// Corpus path: the listing cache itself, or a directory holding vendors/tops
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Config file [default: <path>/.layout-checkr/config.toml, fallback ~/.config/layout-checkr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// List each non-compliant package with its failed categories
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress and summary chatter
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Table,
    Json,
}

/// Analysis modes. Dispatched by name rather than a clap subcommand so
/// an unknown mode can be rejected before any corpus I/O happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Report,
    Dirs,
    Files,
    DirNames,
    FileNames,
    Compliance,
    Dump,
}

impl Mode {
    pub fn parse(name: &str) -> Option<Mode> {
        match name {
            "report" => Some(Mode::Report),
            "dirs" => Some(Mode::Dirs),
            "files" => Some(Mode::Files),
            "dir-names" => Some(Mode::DirNames),
            "file-names" => Some(Mode::FileNames),
            "compliance" => Some(Mode::Compliance),
            "dump" => Some(Mode::Dump),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names() {
        assert_eq!(Mode::parse("report"), Some(Mode::Report));
        assert_eq!(Mode::parse("dir-names"), Some(Mode::DirNames));
        assert_eq!(Mode::parse("compliance"), Some(Mode::Compliance));
        assert_eq!(Mode::parse("frobnicate"), None);
        assert_eq!(Mode::parse("Report"), None);
    }
}
