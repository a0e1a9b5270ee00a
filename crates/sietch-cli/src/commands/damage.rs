use colored::Colorize;

use sietch_mechanics::rules::roll_damage;

use super::Session;

pub fn run(session: &mut Session, base: u32, effects: u32, qualities: &[String]) -> Result<(), String> {
    let result = roll_damage(base, effects, qualities, &mut session.rng);

    if session.emit_json(&result)? {
        return Ok(());
    }

    println!(
        "  {} {} {}",
        "Damage:".bold(),
        result.damage.to_string().red().bold(),
        format!("({base} + d6 [{}])", result.damage_die).dimmed()
    );
    println!(
        "  {} {} {}",
        "Effects:".bold(),
        result.effects.to_string().yellow().bold(),
        format!("({effects} + d6 [{}])", result.effects_die).dimmed()
    );
    for note in &result.special {
        println!("  - {note}");
    }

    Ok(())
}
