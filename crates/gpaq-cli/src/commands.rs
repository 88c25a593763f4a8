use anyhow::Result;
use comfy_table::Table;

use gpaq_cli::pipeline::{RunConfig, run_batch};
use gpaq_cli::types::BatchOutcome;
use gpaq_model::{COLUMN_SPECS, ID_COLUMN, format_numeric};
use gpaq_output::OutputLayout;

use crate::cli::RunArgs;
use crate::summary::apply_table_style;

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Block", "Item", "Accepted values"]);
    apply_table_style(&mut table);
    table.add_row(vec![ID_COLUMN, "-", "Respondent identifier", "any text"]);
    for spec in &COLUMN_SPECS {
        let accepted = match spec.range() {
            Some((min, max)) => format!("{} to {}", format_numeric(min), format_numeric(max)),
            None => "1 (yes) or 2 (no)".to_string(),
        };
        table.add_row(vec![
            spec.name.to_string(),
            spec.block.label().to_string(),
            spec.kind.label().to_string(),
            accepted,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_checks(args: &RunArgs) -> Result<BatchOutcome> {
    let layout = if args.independent {
        OutputLayout::Independent
    } else {
        OutputLayout::Concatenated
    };
    let config = RunConfig::new(&args.directory, &args.output)
        .with_layout(layout)
        .with_dry_run(args.dry_run);
    Ok(run_batch(&config)?)
}
