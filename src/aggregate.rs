//! Corpus aggregation in two passes: a frequency survey over every
//! listing, then a classify-and-fold that turns the counts into a
//! grouped [`Report`]. Classification consults corpus-wide counts, so
//! the survey must be complete before any entry is classified; the
//! sequential boundary between [`count_names`] and [`build_report`] is
//! that barrier.
//!
//! Both passes run in parallel over packages with per-worker tables
//! that are merged afterwards. Counts are order-independent and
//! tie-breaks use corpus positions, so the output is identical no
//! matter how the packages were split across workers.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::classify::dirs::DirRules;
use crate::classify::files::FileRules;
use crate::models::{
    Corpus, DirGroup, EntryKind, FileGroup, GroupStat, NameStat, Package, Report, Vendor,
};

/// Corpus position of an entry: (package index, entry index) in corpus
/// iteration order. Earlier positions win ordering ties.
type Position = (usize, usize);

#[derive(Debug, Clone, Copy)]
struct NameFreq {
    count: u64,
    first_seen: Position,
}

/// Occurrence counts for one entry kind, keyed by normalized name.
#[derive(Debug, Default)]
pub struct FreqTable {
    names: HashMap<String, NameFreq>,
}

impl FreqTable {
    fn record(&mut self, name: &str, at: Position) {
        match self.names.get_mut(name) {
            Some(freq) => {
                freq.count += 1;
                if at < freq.first_seen {
                    freq.first_seen = at;
                }
            }
            None => {
                self.names.insert(
                    name.to_string(),
                    NameFreq {
                        count: 1,
                        first_seen: at,
                    },
                );
            }
        }
    }

    fn merge(mut self, other: FreqTable) -> FreqTable {
        for (name, freq) in other.names {
            match self.names.get_mut(&name) {
                Some(mine) => {
                    mine.count += freq.count;
                    if freq.first_seen < mine.first_seen {
                        mine.first_seen = freq.first_seen;
                    }
                }
                None => {
                    self.names.insert(name, freq);
                }
            }
        }
        self
    }

    pub fn count(&self, name: &str) -> u64 {
        self.names.get(name).map_or(0, |f| f.count)
    }

    pub fn unique(&self) -> usize {
        self.names.len()
    }

    /// Names by descending count, ties broken by earliest corpus
    /// position. This is the canonical listing order for every output.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut names: Vec<(&str, &NameFreq)> = self
            .names
            .iter()
            .map(|(name, freq)| (name.as_str(), freq))
            .collect();
        names.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        names.into_iter().map(|(name, freq)| (name, freq.count)).collect()
    }
}

/// Pass 1: survey every package once, counting directory and file
/// names separately.
pub fn count_names(corpus: &Corpus) -> (FreqTable, FreqTable) {
    let packages: Vec<(&Vendor, &Package)> = corpus.packages().collect();

    packages
        .par_iter()
        .enumerate()
        .fold(
            || (FreqTable::default(), FreqTable::default()),
            |(mut dirs, mut files), (package_idx, (_, package))| {
                for (entry_idx, entry) in package.entries.iter().enumerate() {
                    let at = (package_idx, entry_idx);
                    match entry.kind {
                        EntryKind::Directory => dirs.record(&entry.name, at),
                        EntryKind::File => files.record(&entry.name, at),
                    }
                }
                (dirs, files)
            },
        )
        .reduce(
            || (FreqTable::default(), FreqTable::default()),
            |(d1, f1), (d2, f2)| (d1.merge(d2), f1.merge(f2)),
        )
}

/// Pass 2: classify every entry instance against the survey counts and
/// fold the per-name tallies into an ordered [`Report`].
pub fn build_report(
    corpus: &Corpus,
    dir_freq: &FreqTable,
    file_freq: &FreqTable,
    dir_rules: &DirRules,
    file_rules: &FileRules,
) -> Report {
    type Tally<G> = HashMap<String, (G, u64)>;

    let packages: Vec<(&Vendor, &Package)> = corpus.packages().collect();

    let (dir_tally, file_tally) = packages
        .par_iter()
        .fold(
            || (Tally::<DirGroup>::new(), Tally::<FileGroup>::new()),
            |(mut dirs, mut files), (_, package)| {
                for entry in &package.entries {
                    match entry.kind {
                        EntryKind::Directory => {
                            let count = dir_freq.count(&entry.name);
                            if let Some(group) = dir_rules.classify(&entry.name, count) {
                                dirs.entry(entry.name.clone()).or_insert((group, 0)).1 += 1;
                            }
                        }
                        EntryKind::File => {
                            let count = file_freq.count(&entry.name);
                            if let Some(group) = file_rules.classify(&entry.name, count) {
                                files.entry(entry.name.clone()).or_insert((group, 0)).1 += 1;
                            }
                        }
                    }
                }
                (dirs, files)
            },
        )
        .reduce(
            || (Tally::new(), Tally::new()),
            |(d1, f1), (d2, f2)| (merge_tally(d1, d2), merge_tally(f1, f2)),
        );

    let package_count = corpus.package_count();
    Report {
        vendor_count: corpus.vendor_count(),
        package_count,
        dir_groups: group_stats(dir_tally, dir_freq, DirGroup::Other, package_count),
        file_groups: group_stats(file_tally, file_freq, FileGroup::Other, package_count),
    }
}

/// Classification is a pure function of (name, count), so the same name
/// carries the same group in both halves and only the counts add.
fn merge_tally<G: Copy>(
    mut into: HashMap<String, (G, u64)>,
    from: HashMap<String, (G, u64)>,
) -> HashMap<String, (G, u64)> {
    for (name, (group, count)) in from {
        into.entry(name).or_insert((group, 0)).1 += count;
    }
    into
}

/// Order one kind's tallies into group stats: names inside a group stay
/// in frequency order, groups are ordered by descending total with ties
/// kept in arrival order, and the catch-all group goes last no matter
/// its weight, even when empty.
fn group_stats<G>(
    tally: HashMap<String, (G, u64)>,
    freq: &FreqTable,
    catch_all: G,
    package_count: usize,
) -> Vec<GroupStat>
where
    G: Copy + PartialEq + std::fmt::Display,
{
    // Walking names in frequency order makes group arrival order, and
    // with it the tie-break below, independent of hash iteration.
    let mut buckets: Vec<(G, Vec<NameStat>)> = Vec::new();
    for (name, _) in freq.sorted() {
        let (group, count) = match tally.get(name) {
            Some(&(group, count)) => (group, count),
            None => continue,
        };
        let stat = NameStat {
            name: name.to_string(),
            count,
            percentage: round_to(percent(count, package_count), 3),
        };
        match buckets.iter_mut().find(|(g, _)| *g == group) {
            Some((_, names)) => names.push(stat),
            None => buckets.push((group, vec![stat])),
        }
    }

    let catch_all_names = buckets
        .iter()
        .position(|(g, _)| *g == catch_all)
        .map(|idx| buckets.remove(idx).1)
        .unwrap_or_default();

    let mut stats: Vec<GroupStat> = buckets
        .into_iter()
        .map(|(group, names)| {
            let count = names.iter().map(|n| n.count).sum();
            GroupStat {
                label: group.to_string(),
                count,
                percentage: Some(round_to(percent(count, package_count), 1)),
                names,
            }
        })
        .collect();
    // Stable sort keeps arrival order on equal totals.
    stats.sort_by(|a, b| b.count.cmp(&a.count));

    stats.push(GroupStat {
        label: catch_all.to_string(),
        count: catch_all_names.iter().map(|n| n.count).sum(),
        percentage: None,
        names: catch_all_names,
    });

    stats
}

fn percent(count: u64, package_count: usize) -> f64 {
    if package_count == 0 {
        return 0.0;
    }
    count as f64 / package_count as f64 * 100.0
}

/// Round half away from zero to `decimals` places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(listings: &[(&str, &str, &[&str])]) -> Corpus {
        let mut vendors: Vec<Vendor> = Vec::new();
        for &(vendor, package, lines) in listings {
            let package = Package::from_listing(package, lines.iter().copied());
            match vendors.iter_mut().find(|v| v.name == vendor) {
                Some(v) => v.packages.push(package),
                None => vendors.push(Vendor {
                    name: vendor.to_string(),
                    packages: vec![package],
                }),
            }
        }
        Corpus { vendors }
    }

    fn report_for(corpus: &Corpus) -> Report {
        let (dir_freq, file_freq) = count_names(corpus);
        let dir_rules = DirRules::new();
        let file_rules = FileRules::new().unwrap();
        build_report(corpus, &dir_freq, &file_freq, &dir_rules, &file_rules)
    }

    #[test]
    fn test_counts_are_instances_not_packages() {
        let c = corpus(&[
            ("acme", "a", &["src/", "lib/", "README.md"]),
            ("acme", "b", &["src/", "README.md"]),
            ("zeta", "c", &["lib/", "README.md"]),
        ]);
        let report = report_for(&c);

        // src/ twice plus lib/ twice: four source-directory instances
        // across three packages.
        let source = &report.dir_groups[0];
        assert_eq!(source.label, "source code directory");
        assert_eq!(source.count, 4);
        assert_eq!(source.percentage, Some(133.3));
    }

    #[test]
    fn test_name_and_group_percentages() {
        let c = corpus(&[
            ("acme", "a", &["src/", "README.md"]),
            ("acme", "b", &["src/", "README.md"]),
            ("zeta", "c", &["README.md"]),
        ]);
        let report = report_for(&c);

        let source = &report.dir_groups[0];
        assert_eq!(source.count, 2);
        assert_eq!(source.percentage, Some(66.7));
        assert_eq!(source.names[0].name, "src/");
        assert_eq!(source.names[0].percentage, 66.667);

        let readme = &report.file_groups[0];
        assert_eq!(readme.label, "read-me-first file");
        assert_eq!(readme.count, 3);
        assert_eq!(readme.percentage, Some(100.0));
        assert_eq!(readme.names[0].percentage, 100.0);
    }

    #[test]
    fn test_catch_all_groups_always_last_even_when_empty() {
        let c = corpus(&[
            ("acme", "a", &["src/", "README.md"]),
            ("acme", "b", &["src/", "README.md"]),
        ]);
        let report = report_for(&c);

        let last_dir = report.dir_groups.last().unwrap();
        assert_eq!(last_dir.label, "other directories");
        assert_eq!(last_dir.count, 0);
        assert_eq!(last_dir.percentage, None);
        assert!(last_dir.names.is_empty());

        let last_file = report.file_groups.last().unwrap();
        assert_eq!(last_file.label, "other files");
        assert_eq!(last_file.count, 0);
        assert_eq!(last_file.percentage, None);
    }

    #[test]
    fn test_catch_all_outweighing_named_groups_stays_last() {
        let c = corpus(&[
            ("acme", "a", &["vendor/", "app/", "src/"]),
            ("acme", "b", &["vendor/", "app/", "src/"]),
            ("zeta", "c", &["vendor/", "app/"]),
        ]);
        let report = report_for(&c);

        let last = report.dir_groups.last().unwrap();
        assert_eq!(last.label, "other directories");
        assert_eq!(last.count, 6);
        assert!(last.count > report.dir_groups[0].count);
    }

    #[test]
    fn test_groups_ordered_by_total_descending() {
        let c = corpus(&[
            ("acme", "a", &["tests/", "docs/"]),
            ("acme", "b", &["tests/", "docs/"]),
            ("zeta", "c", &["tests/"]),
        ]);
        let report = report_for(&c);

        assert_eq!(report.dir_groups[0].label, "tests directory");
        assert_eq!(report.dir_groups[0].count, 3);
        assert_eq!(report.dir_groups[1].label, "documentation directory");
        assert_eq!(report.dir_groups[1].count, 2);
    }

    #[test]
    fn test_equal_totals_keep_arrival_order() {
        // docs/ outranks tests/ in the frequency table (same count,
        // earlier first appearance), so its group arrives first.
        let c = corpus(&[
            ("acme", "a", &["docs/", "tests/"]),
            ("acme", "b", &["docs/", "tests/"]),
        ]);
        let report = report_for(&c);

        assert_eq!(report.dir_groups[0].label, "documentation directory");
        assert_eq!(report.dir_groups[1].label, "tests directory");
    }

    #[test]
    fn test_names_within_group_in_frequency_order() {
        let c = corpus(&[
            ("acme", "a", &["lib/", "src/"]),
            ("acme", "b", &["lib/", "src/"]),
            ("zeta", "c", &["lib/"]),
        ]);
        let report = report_for(&c);

        let source = &report.dir_groups[0];
        let names: Vec<&str> = source.names.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["lib/", "src/"]);
    }

    #[test]
    fn test_singletons_and_namespace_roots_excluded() {
        let c = corpus(&[
            ("acme", "a", &["src/", "Symfony/", "once/"]),
            ("acme", "b", &["src/", "Symfony/"]),
        ]);
        let report = report_for(&c);

        let total: u64 = report.dir_groups.iter().map(|g| g.count).sum();
        // Two src/ instances survive; Symfony/ (namespace root) and
        // once/ (singleton) are dropped.
        assert_eq!(total, 2);
    }

    #[test]
    fn test_instance_conservation() {
        let c = corpus(&[
            ("acme", "a", &["src/", "vendor/", "README.md", "composer.json"]),
            ("acme", "b", &["src/", "vendor/", "README.md", "composer.json"]),
        ]);
        let report = report_for(&c);

        let dir_total: u64 = report.dir_groups.iter().map(|g| g.count).sum();
        let file_total: u64 = report.file_groups.iter().map(|g| g.count).sum();
        assert_eq!(dir_total, 4);
        assert_eq!(file_total, 4);
    }

    #[test]
    fn test_empty_corpus() {
        let c = corpus(&[]);
        let report = report_for(&c);

        assert_eq!(report.vendor_count, 0);
        assert_eq!(report.package_count, 0);
        assert_eq!(report.dir_groups.len(), 1);
        assert_eq!(report.dir_groups[0].label, "other directories");
        assert_eq!(report.file_groups.len(), 1);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let c = corpus(&[
            ("acme", "a", &["src/", "tests/", "docs/", "README.md", "LICENSE"]),
            ("acme", "b", &["src/", "test/", "doc/", "readme.txt", "COPYING"]),
            ("beta", "c", &["lib/", "tests/", "vendor/", "README.md", "composer.json"]),
            ("beta", "d", &["lib/", "Symfony/", "CHANGELOG.md", "composer.json"]),
            ("zeta", "e", &["src/", "vendor/", "README.md", "CHANGELOG.md"]),
        ]);

        let first = report_for(&c);
        let first_json = serde_json::to_string(&first).unwrap();
        let first_text = crate::report::text::render(&first, crate::report::Section::Both);
        for _ in 0..10 {
            let again = report_for(&c);
            assert_eq!(first_json, serde_json::to_string(&again).unwrap());
            assert_eq!(
                first_text,
                crate::report::text::render(&again, crate::report::Section::Both)
            );
        }
    }

    #[test]
    fn test_frequency_table_tie_break_by_first_position() {
        let c = corpus(&[
            ("acme", "a", &["zzz.txt", "aaa.txt"]),
            ("acme", "b", &["zzz.txt", "aaa.txt"]),
        ]);
        let (_, file_freq) = count_names(&c);
        let sorted = file_freq.sorted();
        // Equal counts: zzz.txt appeared first in the corpus walk.
        assert_eq!(sorted[0], ("zzz.txt", 2));
        assert_eq!(sorted[1], ("aaa.txt", 2));
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(0.05, 1), 0.1);
        assert_eq!(round_to(12.25, 1), 12.3);
        assert_eq!(round_to(33.3333, 1), 33.3);
        assert_eq!(round_to(66.6666, 3), 66.667);
        assert_eq!(round_to(0.0005, 3), 0.001);
    }
}
