use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use ft_core::FortuneTables;
use ft_core::tables::{LEVELS_FILE, MAPPING_DOUBLE_FILE, MAPPING_SINGLE_FILE, SOLUTIONS_FILE};

pub fn run(dir: &Path) -> Result<(), String> {
    let tables = FortuneTables::load_dir(dir).map_err(|e| e.to_string())?;
    let stats = tables.stats();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Table", "File", "Rows"]);
    table.add_row(vec![
        "double (0-99)".to_string(),
        MAPPING_DOUBLE_FILE.to_string(),
        stats.double.to_string(),
    ]);
    table.add_row(vec![
        "single (0-9999)".to_string(),
        MAPPING_SINGLE_FILE.to_string(),
        stats.single.to_string(),
    ]);
    table.add_row(vec![
        "solutions".to_string(),
        SOLUTIONS_FILE.to_string(),
        stats.solutions.to_string(),
    ]);
    table.add_row(vec![
        "levels".to_string(),
        LEVELS_FILE.to_string(),
        stats.levels.to_string(),
    ]);

    println!("{table}");
    println!();
    println!("  data: {}", dir.display());

    Ok(())
}
