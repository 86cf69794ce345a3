use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use fallen_mechanics::{Character, build_from_snapshot};

use crate::OutputFormat;

pub fn run(file: &Path, format: OutputFormat) -> Result<(), String> {
    let snapshot = super::load_snapshot(file)?;
    let character = build_from_snapshot(&snapshot).map_err(|e| e.to_string())?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&character).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        OutputFormat::Table => print_tables(&character),
    }

    Ok(())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn print_tables(character: &Character) {
    if !character.vocation_rolls.is_empty() {
        let mut table = new_table(vec!["Vocation", "Skill", "Level", "Dice"]);
        for vocation in &character.vocation_rolls {
            table.add_row(vec![
                vocation.name.clone(),
                String::new(),
                String::new(),
                vocation.dice_pool.to_string(),
            ]);
            for skill in &vocation.vocational_skills {
                table.add_row(vec![
                    String::new(),
                    skill.desc.clone(),
                    skill.level.to_string(),
                    skill.dice_pool.to_string(),
                ]);
            }
        }
        println!("  {}", "Vocations".bold());
        println!("{table}");
        println!();
    }

    if !character.core_skill_rolls.is_empty() {
        let mut table = new_table(vec!["Skill", "Level", "Dice"]);
        for skill in &character.core_skill_rolls {
            table.add_row(vec![
                skill.desc.clone(),
                skill.level.to_string(),
                skill.dice_pool.to_string(),
            ]);
        }
        println!("  {}", "Core skills".bold());
        println!("{table}");
        println!();
    }

    if !character.combat_rolls.is_empty() {
        let mut table = new_table(vec![
            "Attack",
            "Dice",
            "Penetration",
            "Range",
            "Damage",
            "Opponents",
            "Area",
        ]);
        for roll in &character.combat_rolls {
            table.add_row(roll.to_row().to_vec());
        }
        println!("  {}", "Combat".bold());
        println!("{table}");
        println!();
    }

    if !character.calculated_effect_table.is_empty() {
        let mut table = new_table(vec!["Effect", "Value", "Duration"]);
        for effect in &character.calculated_effect_table {
            table.add_row(effect.to_row().to_vec());
        }
        println!("  {}", "Effects".bold());
        println!("{table}");
        println!();
    }

    println!(
        "  {} vocations, {} core skills, {} combat rolls",
        character.vocation_rolls.len(),
        character.core_skill_rolls.len(),
        character.combat_rolls.len()
    );
}
