//! Basic example demonstrating rst_table functionality.

use rst_table::prelude::*;

fn main() -> Result<(), TableError> {
    // Build a table row by row
    let table = Table::new()
        .with_head_row(["Symbol", "Rule"])
        .with_body_row(["=", "head top"])
        .with_body_row(["-", "head bottom"])
        .with_body_row(["=", "body bottom"]);

    // Render with the default rules
    let renderer = TableRenderer::new(table.clone(), Settings::default())?;
    println!("{renderer}");
    println!();

    // Override only the rule above the header
    let overrides = SettingsOverride::new().head_top("#");
    println!("{}", TableRenderer::new(table, overrides)?.render());
    println!();

    // Malformed tables can still be drawn, misaligned
    let ragged = Table::new()
        .with_head_row(["a", "b"])
        .with_body_row(["c"]);
    match TableRenderer::new(ragged.clone(), Settings::default()) {
        Ok(renderer) => println!("{renderer}"),
        Err(err) => {
            eprintln!("rejected: {err}");
            println!("{}", TableRenderer::lenient(ragged, Settings::default()));
        }
    }

    Ok(())
}
