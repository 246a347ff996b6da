use anyhow::Result;
use regex::Regex;

use crate::models::FileGroup;

use super::DEFAULT_MIN_OCCURRENCES;

/// Ordered file-name rules, first match wins. The broad contains-README
/// and contains-LICENSE patterns deliberately shadow narrower rules
/// further down (`README.CONTRIBUTING` lands in the read-me group), so
/// the order is part of the contract. All patterns are compiled
/// case-insensitive; the misspelled variants are spellings that
/// actually occur in the corpus.
const FILE_GROUPS: &[(&str, FileGroup)] = &[
    (r"^.*README.*$", FileGroup::Readme),
    (r"^USAGE(\.[a-z]+)?$", FileGroup::Readme),
    (r"^SUMMARY(\.[a-z]+)?$", FileGroup::Readme),
    (r"^DESCRIPTION(\.[a-z]+)?$", FileGroup::Readme),
    (r"^IMPORTANT(\.[a-z]+)?$", FileGroup::Readme),
    (r"^NOTICE(\.[a-z]+)?$", FileGroup::Readme),
    (r"^GETTING(_|-)STARTED(\.[a-z]+)?$", FileGroup::Readme),
    (r"^.*LICENSE.*$", FileGroup::License),
    (r"^.*EULA.*$", FileGroup::License),
    (r"^.*(GPL|BSD).*$", FileGroup::License),
    (
        r"^([A-Z-]+)?LI(N)?(S|C)(E|A)N(S|C)(E|A)(_[A-Z_]+)?(\.[a-z]+)?$",
        FileGroup::License,
    ),
    (r"^COPY(I)?NG(\.[a-z]+)?$", FileGroup::License),
    (r"^COPYRIGHT(\.[a-z]+)?$", FileGroup::License),
    (r"^CHANGELOG.*$", FileGroup::Changelog),
    (r"^CHANGLOG.*$", FileGroup::Changelog),
    (r"^CAHNGELOG.*$", FileGroup::Changelog),
    (r"^WHATSNEW(\.[a-z]+)?$", FileGroup::Changelog),
    (r"^RELEASE((_|-)?NOTES)?(\.[a-z]+)?$", FileGroup::Changelog),
    (r"^RELEASES(\.[a-z]+)?$", FileGroup::Changelog),
    (r"^CHANGES(\.[a-z]+)?$", FileGroup::Changelog),
    (r"^CHANGE(\.[a-z]+)?$", FileGroup::Changelog),
    (r"^HISTORY(\.[a-z]+)?$", FileGroup::Changelog),
    (r"^DEVELOPMENT(\.[a-z]+)?$", FileGroup::Contributing),
    (r"^CONTRIBUTING(\.[a-z]+)?$", FileGroup::Contributing),
    (r"^README\.CONTRIBUTING(\.[a-z]+)?$", FileGroup::Contributing),
    (r"^DEVELOPMENT_README(\.[a-z]+)?$", FileGroup::Contributing),
    (r"^CONTRIBUTE(\.[a-z]+)?$", FileGroup::Contributing),
    (r"^HACKING(\.[a-z]+)?$", FileGroup::Contributing),
];

pub struct FileRules {
    min_occurrences: u64,
    rules: Vec<(Regex, FileGroup)>,
}

impl FileRules {
    pub fn new() -> Result<Self> {
        Self::with_min_occurrences(DEFAULT_MIN_OCCURRENCES)
    }

    pub fn with_min_occurrences(min_occurrences: u64) -> Result<Self> {
        let rules = FILE_GROUPS
            .iter()
            .map(|&(pattern, group)| Ok((Regex::new(&format!("(?i){}", pattern))?, group)))
            .collect::<Result<Vec<_>>>()?;
        Ok(FileRules {
            min_occurrences,
            rules,
        })
    }

    /// Classify one file name given its corpus-wide occurrence count.
    /// Returns `None` for noise, the first matching rule's group
    /// otherwise, and the catch-all group when nothing matches.
    pub fn classify(&self, name: &str, count: u64) -> Option<FileGroup> {
        if count < self.min_occurrences {
            return None;
        }
        for (regex, group) in &self.rules {
            if regex.is_match(name) {
                return Some(*group);
            }
        }
        Some(FileGroup::Other)
    }
}
