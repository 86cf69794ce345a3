pub mod build;
pub mod check;

use std::path::Path;

use fallen_mechanics::SheetSnapshot;

/// Read and parse a sheet snapshot.
fn load_snapshot(file: &Path) -> Result<SheetSnapshot, String> {
    let json = std::fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    SheetSnapshot::from_json(&json).map_err(|e| format!("{}: {e}", file.display()))
}
