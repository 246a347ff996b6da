use std::collections::HashMap;

use crate::models::DirGroup;

use super::DEFAULT_MIN_OCCURRENCES;

/// Known top-level directory names, trailing slash included. Collected
/// from manual review of the most frequent names in the corpus; lookup
/// is exact, so `Resources/` and `resources/` need separate rows.
const DIR_GROUPS: &[(&str, DirGroup)] = &[
    // executables
    ("bin/", DirGroup::Bin),
    ("cli/", DirGroup::Bin),
    ("scripts/", DirGroup::Bin),
    ("console/", DirGroup::Bin),
    ("shell/", DirGroup::Bin),
    ("script/", DirGroup::Bin),
    // documentation
    ("docs/", DirGroup::Docs),
    ("manual/", DirGroup::Docs),
    ("documentation/", DirGroup::Docs),
    ("usage/", DirGroup::Docs),
    ("doc/", DirGroup::Docs),
    ("guide/", DirGroup::Docs),
    ("phpdoc/", DirGroup::Docs),
    ("apidocs/", DirGroup::Docs),
    ("apidoc/", DirGroup::Docs),
    ("api-reference/", DirGroup::Docs),
    ("user_guide/", DirGroup::Docs),
    ("manuals/", DirGroup::Docs),
    ("phpdocs/", DirGroup::Docs),
    // source code
    ("src/", DirGroup::Source),
    ("exception/", DirGroup::Source),
    ("exceptions/", DirGroup::Source),
    ("src-files/", DirGroup::Source),
    ("traits/", DirGroup::Source),
    ("interfaces/", DirGroup::Source),
    ("common/", DirGroup::Source),
    ("sources/", DirGroup::Source),
    ("php/", DirGroup::Source),
    ("inc/", DirGroup::Source),
    ("libraries/", DirGroup::Source),
    ("autoloads/", DirGroup::Source),
    ("autoload/", DirGroup::Source),
    ("source/", DirGroup::Source),
    ("includes/", DirGroup::Source),
    ("include/", DirGroup::Source),
    ("lib/", DirGroup::Source),
    ("libs/", DirGroup::Source),
    ("library/", DirGroup::Source),
    ("code/", DirGroup::Source),
    ("classes/", DirGroup::Source),
    ("func/", DirGroup::Source),
    ("src-dev/", DirGroup::Source),
    // tests
    ("tests/", DirGroup::Tests),
    ("test/", DirGroup::Tests),
    ("unit-tests/", DirGroup::Tests),
    ("phpunit/", DirGroup::Tests),
    ("testing/", DirGroup::Tests),
    ("unittest/", DirGroup::Tests),
    ("unit_tests/", DirGroup::Tests),
    ("unit_test/", DirGroup::Tests),
    ("phpunit-tests/", DirGroup::Tests),
    // web-served
    ("assets/", DirGroup::Public),
    ("static/", DirGroup::Public),
    ("html/", DirGroup::Public),
    ("httpdocs/", DirGroup::Public),
    ("public/", DirGroup::Public),
    ("media/", DirGroup::Public),
    ("docroot/", DirGroup::Public),
    ("css/", DirGroup::Public),
    ("fonts/", DirGroup::Public),
    ("styles/", DirGroup::Public),
    ("style/", DirGroup::Public),
    ("js/", DirGroup::Public),
    ("javascript/", DirGroup::Public),
    ("javascripts/", DirGroup::Public),
    ("images/", DirGroup::Public),
    ("site/", DirGroup::Public),
    ("mysite/", DirGroup::Public),
    ("img/", DirGroup::Public),
    ("imgs/", DirGroup::Public),
    ("icons/", DirGroup::Public),
    ("web/", DirGroup::Public),
    ("pub/", DirGroup::Public),
    ("webroot/", DirGroup::Public),
    ("wwwroot/", DirGroup::Public),
    ("www/", DirGroup::Public),
    ("htdocs/", DirGroup::Public),
    ("asset/", DirGroup::Public),
    ("public_html/", DirGroup::Public),
    ("publish/", DirGroup::Public),
    ("pages/", DirGroup::Public),
    ("font/", DirGroup::Public),
    // configuration
    ("config/", DirGroup::Config),
    ("etc/", DirGroup::Config),
    ("settings/", DirGroup::Config),
    ("configuration/", DirGroup::Config),
    ("configs/", DirGroup::Config),
    ("_config/", DirGroup::Config),
    ("conf/", DirGroup::Config),
    // resources
    ("Resources/", DirGroup::Resources),
    ("resources/", DirGroup::Resources),
    ("res/", DirGroup::Resources),
    ("resource/", DirGroup::Resources),
    ("Resource/", DirGroup::Resources),
    ("ressources/", DirGroup::Resources),
    ("Ressources/", DirGroup::Resources),
];

pub struct DirRules {
    min_occurrences: u64,
    groups: HashMap<&'static str, DirGroup>,
}

impl DirRules {
    pub fn new() -> Self {
        Self::with_min_occurrences(DEFAULT_MIN_OCCURRENCES)
    }

    pub fn with_min_occurrences(min_occurrences: u64) -> Self {
        DirRules {
            min_occurrences,
            groups: DIR_GROUPS.iter().copied().collect(),
        }
    }

    /// Classify one directory name given its corpus-wide occurrence
    /// count. Returns `None` when the name should be left out of the
    /// report, either as noise or as a namespace root.
    ///
    /// The checks run in a fixed order: noise filter, table lookup,
    /// namespace heuristic, catch-all. Swapping the last two would
    /// misfile `Resources/`, so the order is part of the contract.
    pub fn classify(&self, name: &str, count: u64) -> Option<DirGroup> {
        if count < self.min_occurrences {
            return None;
        }
        if let Some(&group) = self.groups.get(name) {
            return Some(group);
        }
        // A name that does not start with a lowercase ASCII letter is
        // almost always the package's own namespace root (Symfony/,
        // Zend/, PHPUnit/), not a layout convention shared across
        // packages. Checked on the raw first byte.
        if !name.as_bytes().first().is_some_and(u8::is_ascii_lowercase) {
            return None;
        }
        Some(DirGroup::Other)
    }
}

impl Default for DirRules {
    fn default() -> Self {
        Self::new()
    }
}
