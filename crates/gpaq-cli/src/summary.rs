use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use gpaq_cli::types::{BatchOutcome, TableStatus};
use gpaq_output::OutputLayout;

pub fn print_summary(outcome: &BatchOutcome) {
    println!("Input: {}", outcome.input_dir.display());
    if outcome.dry_run {
        println!("Output: dry run, nothing written");
    } else {
        let layout = match outcome.layout {
            OutputLayout::Independent => "one file per table",
            OutputLayout::Concatenated => "concatenated",
        };
        println!("Output: {} ({layout})", outcome.output_dir.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Records"),
        header_cell("Status"),
        header_cell("Issues"),
        header_cell("MET"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    let mut total_records = 0usize;
    let mut total_issues = 0usize;
    for summary in &outcome.tables {
        total_records += summary.records;
        total_issues += summary.issues;
        table.add_row(vec![
            Cell::new(&summary.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.records),
            status_cell(summary.status),
            count_cell(summary.issues),
            derived_cell(summary.status == TableStatus::Derived),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(total_issues).add_attribute(Attribute::Bold),
        Cell::new(format!("{}/{}", outcome.derived_count(), outcome.tables.len()))
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_issue_table(outcome);

    for path in &outcome.written {
        println!("Saved: {}", path.display());
    }
    if outcome.needs_review() {
        eprintln!(
            "{} issues found in {} tables; manual review required in raw data.",
            outcome.issue_count(),
            outcome.review_count()
        );
    } else {
        println!("No issues found in data integrity checks.");
    }
    println!("Done in {:.2} seconds.", outcome.elapsed.as_secs_f64());
}

fn print_issue_table(outcome: &BatchOutcome) {
    if !outcome.needs_review() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Check"),
        header_cell("Index"),
        header_cell("ID"),
        header_cell("Column"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for rejected in &outcome.rejected {
        table.add_row(vec![
            Cell::new(&rejected.table),
            Cell::new("schema").fg(Color::Red),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new(rejected.error.to_string()),
        ]);
    }
    for finding in outcome.report.findings() {
        let record = finding.issue.record();
        table.add_row(vec![
            Cell::new(&finding.table),
            Cell::new(finding.issue.check().label()).fg(Color::Yellow),
            record.map_or_else(|| dim_cell("-"), |r| Cell::new(r.index)),
            record.map_or_else(|| dim_cell("-"), |r| Cell::new(&r.id)),
            finding
                .issue
                .column()
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(finding.issue.message()),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
        ]);
    }
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: TableStatus) -> Cell {
    let cell = Cell::new(status.label().to_uppercase());
    match status {
        TableStatus::Derived => cell.fg(Color::Green),
        TableStatus::Empty => cell.fg(Color::DarkGrey),
        TableStatus::Flagged => cell.fg(Color::Yellow),
        TableStatus::Rejected => cell.fg(Color::Red).add_attribute(Attribute::Bold),
    }
}

fn derived_cell(derived: bool) -> Cell {
    if derived {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
