//! Per-package naming compliance. Each category pairs one canonical
//! spelling with the synonym spellings that count against it: a package
//! passes a category by using the canonical name, fails it by using a
//! synonym, and passes by default when it has neither. Absence is not
//! non-compliance, a library without tests still names things
//! correctly.

use anyhow::Result;
use rayon::prelude::*;
use regex::Regex;

use crate::models::{Corpus, Entry, Package, Vendor};

/// Directory categories match by literal name, trailing slash included.
struct DirCategory {
    label: &'static str,
    canonical: &'static str,
    synonyms: &'static [&'static str],
}

impl DirCategory {
    /// Scan entries in listing order. The canonical form passes the
    /// category outright; a synonym seen before it fails the category.
    fn passes(&self, entries: &[Entry]) -> bool {
        for entry in entries {
            if entry.name == self.canonical {
                return true;
            }
            if self.synonyms.contains(&entry.name.as_str()) {
                return false;
            }
        }
        true
    }
}

/// File categories: the canonical form is matched case-sensitively
/// (`README.md` complies, `readme.md` does not), synonyms are matched
/// case-insensitively.
struct FileCategory {
    label: &'static str,
    canonical: Regex,
    synonyms: Vec<Regex>,
}

impl FileCategory {
    fn new(name: &'static str, synonyms: &[&str]) -> Result<Self> {
        Ok(FileCategory {
            label: name,
            canonical: Regex::new(&format!(r"^{}(\.[a-z]+)?$", name))?,
            synonyms: synonyms
                .iter()
                .map(|pattern| Ok(Regex::new(&format!("(?i){}", pattern))?))
                .collect::<Result<Vec<_>>>()?,
        })
    }

    fn passes(&self, entries: &[Entry]) -> bool {
        for entry in entries {
            if self.canonical.is_match(&entry.name) {
                return true;
            }
            if self.synonyms.iter().any(|re| re.is_match(&entry.name)) {
                return false;
            }
        }
        true
    }
}

pub struct ComplianceRules {
    dirs: Vec<DirCategory>,
    files: Vec<FileCategory>,
}

impl ComplianceRules {
    pub fn new() -> Result<Self> {
        let dirs = vec![
            DirCategory {
                label: "bin/",
                canonical: "bin/",
                synonyms: &["cli/", "scripts/", "console/", "shell/", "script/"],
            },
            DirCategory {
                label: "config/",
                canonical: "config/",
                synonyms: &[
                    "etc/",
                    "settings/",
                    "configuration/",
                    "configs/",
                    "_config/",
                    "conf/",
                ],
            },
            DirCategory {
                label: "docs/",
                canonical: "docs/",
                synonyms: &[
                    "manual/",
                    "documentation/",
                    "usage/",
                    "doc/",
                    "guide/",
                    "phpdoc/",
                    "apidocs/",
                    "apidoc/",
                    "api-reference/",
                    "user_guide/",
                    "manuals/",
                    "phpdocs/",
                ],
            },
            DirCategory {
                label: "public/",
                canonical: "public/",
                synonyms: &[
                    "assets/",
                    "static/",
                    "html/",
                    "httpdocs/",
                    "media/",
                    "docroot/",
                    "css/",
                    "fonts/",
                    "styles/",
                    "style/",
                    "js/",
                    "javascript/",
                    "javascripts/",
                    "images/",
                    "site/",
                    "mysite/",
                    "img/",
                    "imgs/",
                    "icons/",
                    "web/",
                    "pub/",
                    "webroot/",
                    "wwwroot/",
                    "www/",
                    "htdocs/",
                    "asset/",
                    "public_html/",
                    "publish/",
                    "pages/",
                    "font/",
                ],
            },
            DirCategory {
                label: "src/",
                canonical: "src/",
                synonyms: &[
                    "exception/",
                    "exceptions/",
                    "src-files/",
                    "src-dev/",
                    "traits/",
                    "interfaces/",
                    "common/",
                    "sources/",
                    "php/",
                    "inc/",
                    "libraries/",
                    "autoloads/",
                    "autoload/",
                    "source/",
                    "includes/",
                    "include/",
                    "lib/",
                    "libs/",
                    "library/",
                    "code/",
                    "classes/",
                    "func/",
                ],
            },
            DirCategory {
                label: "resources/",
                canonical: "resources/",
                synonyms: &[
                    "Resources/",
                    "res/",
                    "resource/",
                    "Resource/",
                    "ressources/",
                    "Ressources/",
                ],
            },
            DirCategory {
                label: "tests/",
                canonical: "tests/",
                synonyms: &[
                    "test/",
                    "unit-tests/",
                    "unit_tests/",
                    "unit_test/",
                    "unittest/",
                    "phpunit/",
                    "phpunit-tests/",
                    "testing/",
                ],
            },
        ];

        let files = vec![
            FileCategory::new(
                "CHANGELOG",
                &[
                    r"^.*CHANGLOG.*$",
                    r"^.*CAHNGELOG.*$",
                    r"^WHATSNEW(\.[a-z]+)?$",
                    r"^RELEASE((_|-)?NOTES)?(\.[a-z]+)?$",
                    r"^RELEASES(\.[a-z]+)?$",
                    r"^CHANGES(\.[a-z]+)?$",
                    r"^CHANGE(\.[a-z]+)?$",
                    r"^HISTORY(\.[a-z]+)?$",
                ],
            )?,
            FileCategory::new(
                "CONTRIBUTING",
                &[
                    r"^DEVELOPMENT(\.[a-z]+)?$",
                    r"^README\.CONTRIBUTING(\.[a-z]+)?$",
                    r"^DEVELOPMENT_README(\.[a-z]+)?$",
                    r"^CONTRIBUTE(\.[a-z]+)?$",
                    r"^HACKING(\.[a-z]+)?$",
                ],
            )?,
            FileCategory::new(
                "LICENSE",
                &[
                    r"^.*EULA.*$",
                    r"^.*(GPL|BSD).*$",
                    r"^([A-Z-]+)?LI(N)?(S|C)(E|A)N(S|C)(E|A)(_[A-Z_]+)?(\.[a-z]+)?$",
                    r"^COPY(I)?NG(\.[a-z]+)?$",
                    r"^COPYRIGHT(\.[a-z]+)?$",
                ],
            )?,
            FileCategory::new(
                "README",
                &[
                    r"^USAGE(\.[a-z]+)?$",
                    r"^SUMMARY(\.[a-z]+)?$",
                    r"^DESCRIPTION(\.[a-z]+)?$",
                    r"^IMPORTANT(\.[a-z]+)?$",
                    r"^NOTICE(\.[a-z]+)?$",
                    r"^GETTING(_|-)STARTED(\.[a-z]+)?$",
                ],
            )?,
        ];

        Ok(ComplianceRules { dirs, files })
    }

    /// Check one package's entries against every category in the fixed
    /// category order. Returns the labels of the failed categories; an
    /// empty list means the package is fully compliant.
    pub fn evaluate(&self, entries: &[Entry]) -> Vec<&'static str> {
        let mut failed = Vec::new();
        for category in &self.dirs {
            if !category.passes(entries) {
                failed.push(category.label);
            }
        }
        for category in &self.files {
            if !category.passes(entries) {
                failed.push(category.label);
            }
        }
        failed
    }
}

#[derive(Debug)]
pub struct PackageCompliance {
    pub vendor: String,
    pub package: String,
    pub failed: Vec<&'static str>,
}

impl PackageCompliance {
    pub fn is_compliant(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn id(&self) -> String {
        format!("{}/{}", self.vendor, self.package)
    }
}

/// Evaluate every package in parallel. Results come back in corpus
/// iteration order, packages are independent so nothing else about the
/// split matters.
pub fn evaluate_corpus(corpus: &Corpus, rules: &ComplianceRules) -> Vec<PackageCompliance> {
    let packages: Vec<(&Vendor, &Package)> = corpus.packages().collect();
    packages
        .par_iter()
        .map(|(vendor, package)| PackageCompliance {
            vendor: vendor.name.clone(),
            package: package.name.clone(),
            failed: rules.evaluate(&package.entries),
        })
        .collect()
}
