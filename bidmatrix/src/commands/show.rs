// bidmatrix/src/commands/show.rs

use std::path::Path;

use bidmatrix_core::application::read_matrix;

use super::Project;
use crate::display;

pub fn execute(project_dir: &Path) -> anyhow::Result<()> {
    let project = Project::open(project_dir)?;
    let table = read_matrix(&project.store)?;

    println!("{}", display::matrix_table(&table));
    println!(
        "📊 {} rows, {} vendors",
        table.rows().len(),
        table.vendors().len()
    );
    Ok(())
}
