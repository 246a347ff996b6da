//! The tab-separated text report. Group lines carry the group label,
//! instance total, and percentage of packages; name lines are indented
//! by one tab under their group. Group percentages use one decimal
//! place, name percentages three, and the catch-all groups leave the
//! percentage column blank.

use crate::aggregate::FreqTable;
use crate::models::{GroupStat, Report};

use super::Section;

pub fn render(report: &Report, section: Section) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} vendors, {} packages\n",
        report.vendor_count, report.package_count
    ));
    if section.dirs() {
        render_groups(&mut out, &report.dir_groups);
    }
    if section.files() {
        render_groups(&mut out, &report.file_groups);
    }
    out
}

fn render_groups(out: &mut String, groups: &[GroupStat]) {
    for group in groups {
        let pct = match group.percentage {
            Some(pct) => format!("{:.1}%", pct),
            None => String::new(),
        };
        out.push_str(&format!("{}\t{}\t{}\n", group.label, group.count, pct));
        for name in &group.names {
            out.push_str(&format!(
                "\t{}\t{}\t{:.3}%\n",
                name.name, name.count, name.percentage
            ));
        }
    }
}

/// Raw per-name frequency listing, no grouping and no noise filter:
/// a totals header, then one `name\tcount` line per distinct name in
/// frequency order.
pub fn render_names(
    vendor_count: usize,
    package_count: usize,
    freq: &FreqTable,
    kind: &str,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} vendors, {} packages, {} unique {} names\n",
        vendor_count,
        package_count,
        freq.unique(),
        kind
    ));
    for (name, count) in freq.sorted() {
        out.push_str(&format!("{}\t{}\n", name, count));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NameStat;

    fn sample_report() -> Report {
        Report {
            vendor_count: 2,
            package_count: 3,
            dir_groups: vec![
                GroupStat {
                    label: "source code directory".to_string(),
                    count: 4,
                    percentage: Some(133.3),
                    names: vec![
                        NameStat {
                            name: "src/".to_string(),
                            count: 2,
                            percentage: 66.667,
                        },
                        NameStat {
                            name: "lib/".to_string(),
                            count: 2,
                            percentage: 66.667,
                        },
                    ],
                },
                GroupStat {
                    label: "other directories".to_string(),
                    count: 0,
                    percentage: None,
                    names: vec![],
                },
            ],
            file_groups: vec![
                GroupStat {
                    label: "read-me-first file".to_string(),
                    count: 3,
                    percentage: Some(100.0),
                    names: vec![NameStat {
                        name: "README.md".to_string(),
                        count: 3,
                        percentage: 100.0,
                    }],
                },
                GroupStat {
                    label: "other files".to_string(),
                    count: 2,
                    percentage: None,
                    names: vec![NameStat {
                        name: "composer.json".to_string(),
                        count: 2,
                        percentage: 66.667,
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_render_both_sections() {
        let out = render(&sample_report(), Section::Both);
        let expected = "2 vendors, 3 packages\n\
                        source code directory\t4\t133.3%\n\
                        \tsrc/\t2\t66.667%\n\
                        \tlib/\t2\t66.667%\n\
                        other directories\t0\t\n\
                        read-me-first file\t3\t100.0%\n\
                        \tREADME.md\t3\t100.000%\n\
                        other files\t2\t\n\
                        \tcomposer.json\t2\t66.667%\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_single_section() {
        let out = render(&sample_report(), Section::Directories);
        assert!(out.contains("source code directory"));
        assert!(!out.contains("read-me-first file"));

        let out = render(&sample_report(), Section::Files);
        assert!(!out.contains("source code directory"));
        assert!(out.contains("read-me-first file"));
    }

    #[test]
    fn test_catch_all_percentage_column_is_blank() {
        let out = render(&sample_report(), Section::Both);
        assert!(out.contains("other directories\t0\t\n"));
        assert!(out.contains("other files\t2\t\n"));
    }

    #[test]
    fn test_fixed_precision() {
        let out = render(&sample_report(), Section::Files);
        // Whole numbers keep their trailing zeros.
        assert!(out.contains("read-me-first file\t3\t100.0%\n"));
        assert!(out.contains("\tREADME.md\t3\t100.000%\n"));
    }

    #[test]
    fn test_render_names_listing() {
        use crate::aggregate::count_names;
        use crate::models::{Corpus, Package, Vendor};

        let corpus = Corpus {
            vendors: vec![Vendor {
                name: "acme".to_string(),
                packages: vec![
                    Package::from_listing("a", ["src/", "README.md", "notes.txt"]),
                    Package::from_listing("b", ["src/", "README.md"]),
                ],
            }],
        };
        let (dir_freq, file_freq) = count_names(&corpus);

        let out = render_names(1, 2, &dir_freq, "directory");
        assert_eq!(out, "1 vendors, 2 packages, 1 unique directory names\nsrc/\t2\n");

        let out = render_names(1, 2, &file_freq, "file");
        // Singletons stay in the raw listing.
        assert_eq!(
            out,
            "1 vendors, 2 packages, 2 unique file names\nREADME.md\t2\nnotes.txt\t1\n"
        );
    }
}
