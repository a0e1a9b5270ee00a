use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use sietch_mechanics::MechError;
use sietch_mechanics::resolution::count::{BASE_DICE, D20};
use sietch_mechanics::rules::{NpcTier, generate_npc_stats, npc_test};

use super::{Session, faces};

pub fn run_generate(session: &Session, tier: &str, concept: &str) -> Result<(), String> {
    let tier: NpcTier = tier.parse().map_err(|e: MechError| e.to_string())?;
    let npc = generate_npc_stats(tier, concept);

    if session.emit_json(&npc)? {
        return Ok(());
    }

    println!("  {} {}", npc.concept.bold(), format!("({tier})").dimmed());
    println!("  Vigor {} | Resolve {}", npc.vigor, npc.resolve);
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Attribute", "Value", "Skill", "Value"]);
    let attributes: Vec<_> = npc.attributes.iter().collect();
    let skills: Vec<_> = npc.skills.iter().collect();
    for row in 0..attributes.len().max(skills.len()) {
        let (attr, attr_value) = attributes
            .get(row)
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .unwrap_or_default();
        let (skill, skill_value) = skills
            .get(row)
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .unwrap_or_default();
        table.add_row(vec![attr, attr_value, skill, skill_value]);
    }
    println!("{table}");

    let drives: Vec<String> = npc
        .drives
        .iter()
        .map(|(name, value)| format!("{name} {value}"))
        .collect();
    println!("  {} {}", "Drives:".dimmed(), drives.join(", "));

    Ok(())
}

pub fn run_test(session: &mut Session, tier: &str, asset: bool, difficulty: u32) -> Result<(), String> {
    let tier: NpcTier = tier.parse().map_err(|e: MechError| e.to_string())?;
    session
        .config
        .validate_dice(BASE_DICE + u32::from(asset), D20)
        .map_err(|e| e.to_string())?;
    let result = npc_test(tier, asset, difficulty, &mut session.rng);

    if session.emit_json(&result)? {
        return Ok(());
    }

    let title = format!(
        "{tier} NPC (TN {}, difficulty {difficulty})",
        result.details.target_number
    );
    println!("  {} [{}]", title.bold(), faces(&result.rolls));
    let verdict = result.outcome.to_string();
    if result.success {
        println!("  {}", verdict.green().bold());
    } else {
        println!("  {}", verdict.red());
    }
    println!("  {}", result.narrative.italic());
    if result.threat > 0 {
        println!("  {}", format!("+{} threat", result.threat).red());
    }

    Ok(())
}
