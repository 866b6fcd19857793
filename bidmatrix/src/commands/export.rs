// bidmatrix/src/commands/export.rs

use std::path::Path;

use bidmatrix_core::application::export_matrix;
use bidmatrix_core::infrastructure::adapters::CsvTableStore;

use super::Project;

pub fn execute(project_dir: &Path, output: &Path) -> anyhow::Result<()> {
    let project = Project::open(project_dir)?;
    let target = CsvTableStore::new(output);

    let table = export_matrix(&project.store, &target)?;

    println!(
        "💾 Exported {} rows x {} vendors to {}",
        table.rows().len(),
        table.vendors().len(),
        output.display()
    );
    Ok(())
}
