use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{GroupStat, Report};

use super::Section;

/// Render the report as human-oriented tables, one per section.
pub fn render(report: &Report, section: Section) {
    println!(
        "{} vendors, {} packages",
        report.vendor_count, report.package_count
    );
    if section.dirs() {
        print_section("Directory group", &report.dir_groups);
    }
    if section.files() {
        print_section("File group", &report.file_groups);
    }
}

fn print_section(title: &str, groups: &[GroupStat]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new(title).add_attribute(Attribute::Bold),
            Cell::new("Count").add_attribute(Attribute::Bold),
            Cell::new("% of packages").add_attribute(Attribute::Bold),
        ]);

    for group in groups {
        let pct = match group.percentage {
            Some(pct) => format!("{:.1}%", pct),
            None => String::new(),
        };
        table.add_row(vec![
            Cell::new(&group.label)
                .add_attribute(Attribute::Bold)
                .fg(Color::Cyan),
            Cell::new(group.count)
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Right),
            Cell::new(pct)
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Right),
        ]);
        for name in &group.names {
            table.add_row(vec![
                Cell::new(format!("  {}", name.name)),
                Cell::new(name.count).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.3}%", name.percentage))
                    .set_alignment(CellAlignment::Right),
            ]);
        }
    }

    println!("{}", table);
}
