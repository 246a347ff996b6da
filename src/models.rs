use serde::Serialize;

use crate::normalize::normalize;

#[derive(Debug, Serialize)]
pub struct Corpus {
    pub vendors: Vec<Vendor>,
}

impl Corpus {
    pub fn vendor_count(&self) -> usize {
        self.vendors.len()
    }

    pub fn package_count(&self) -> usize {
        self.vendors.iter().map(|v| v.packages.len()).sum()
    }

    /// Flatten to `(vendor, package)` pairs in corpus iteration order.
    pub fn packages(&self) -> impl Iterator<Item = (&Vendor, &Package)> {
        self.vendors
            .iter()
            .flat_map(|v| v.packages.iter().map(move |p| (v, p)))
    }
}

#[derive(Debug, Serialize)]
pub struct Vendor {
    pub name: String,
    pub packages: Vec<Package>,
}

#[derive(Debug, Serialize)]
pub struct Package {
    pub name: String,
    pub entries: Vec<Entry>,
}

impl Package {
    /// Build a package from its raw listing, normalizing each line and
    /// dropping the ones that normalize to nothing. The entry list is
    /// never touched again after construction.
    pub fn from_listing<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = lines
            .into_iter()
            .filter_map(|line| Entry::from_raw(line.as_ref()))
            .collect();
        Package {
            name: name.into(),
            entries,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    /// Normalized top-level token; directories keep their trailing `/`.
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn from_raw(raw: &str) -> Option<Self> {
        let name = normalize(raw)?;
        let kind = if name.ends_with('/') {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        Some(Entry { name, kind })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryKind {
    Directory,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DirGroup {
    Bin,
    Source,
    Tests,
    Docs,
    Config,
    Public,
    Resources,
    Other,
}

impl std::fmt::Display for DirGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirGroup::Bin => write!(f, "executables directory"),
            DirGroup::Source => write!(f, "source code directory"),
            DirGroup::Tests => write!(f, "tests directory"),
            DirGroup::Docs => write!(f, "documentation directory"),
            DirGroup::Config => write!(f, "configuration directory"),
            DirGroup::Public => write!(f, "web directory"),
            DirGroup::Resources => write!(f, "resources directory"),
            DirGroup::Other => write!(f, "other directories"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FileGroup {
    Readme,
    License,
    Changelog,
    Contributing,
    Other,
}

impl std::fmt::Display for FileGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileGroup::Readme => write!(f, "read-me-first file"),
            FileGroup::License => write!(f, "license or copyright file"),
            FileGroup::Changelog => write!(f, "changes file"),
            FileGroup::Contributing => write!(f, "contribution guidelines file"),
            FileGroup::Other => write!(f, "other files"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub vendor_count: usize,
    pub package_count: usize,
    pub dir_groups: Vec<GroupStat>,
    pub file_groups: Vec<GroupStat>,
}

#[derive(Debug, Serialize)]
pub struct GroupStat {
    pub label: String,
    pub count: u64,
    /// `None` for the open-ended "other" buckets.
    pub percentage: Option<f64>,
    pub names: Vec<NameStat>,
}

#[derive(Debug, Serialize)]
pub struct NameStat {
    pub name: String,
    pub count: u64,
    pub percentage: f64,
}
