use std::path::Path;

use colored::Colorize;
use fallen_mechanics::validate_tables;

pub fn run(file: &Path) -> Result<(), String> {
    let snapshot = super::load_snapshot(file)?;
    let issues = validate_tables(&snapshot.rules);

    if issues.is_empty() {
        println!("  All checks passed for '{}'.", file.display());
        return Ok(());
    }

    for issue in &issues {
        let line = issue.to_string();
        if issue.is_error {
            eprintln!("  {}", line.red());
        } else {
            eprintln!("  {}", line.yellow());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;
    eprintln!(
        "  {} error{}, {} warning{}",
        errors,
        if errors == 1 { "" } else { "s" },
        warnings,
        if warnings == 1 { "" } else { "s" },
    );

    if errors > 0 {
        Err("validation failed with errors".into())
    } else {
        Ok(())
    }
}
