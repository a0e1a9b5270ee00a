use colored::Colorize;

use sietch_mechanics::{MechError, RollDetails, RollSpec, exploding_roll_with_cap, standard_roll};

use super::{Session, faces};

pub fn run(session: &mut Session, notation: &str, exploding: bool) -> Result<(), String> {
    let spec: RollSpec = notation.parse().map_err(|e: MechError| e.to_string())?;
    session
        .config
        .validate_dice(spec.count, spec.sides)
        .map_err(|e| e.to_string())?;

    let result = if exploding {
        exploding_roll_with_cap(
            spec.count,
            spec.sides,
            spec.modifier,
            session.config.max_explosions,
            &mut session.rng,
        )
    } else {
        standard_roll(spec.count, spec.sides, spec.modifier, &mut session.rng)
    };

    if session.emit_json(&result)? {
        return Ok(());
    }

    println!("  {} {result}", spec.to_string().bold());
    if !result.exploded_dice.is_empty() {
        println!(
            "  {} [{}]",
            "Exploded:".dimmed(),
            faces(&result.exploded_dice)
        );
    }
    if let RollDetails::Exploding { capped: true, .. } = result.details {
        println!("  {}", "Explosion cap reached; chain stopped early.".yellow());
    }
    println!("  {} {}", "Total:".bold(), result.total.to_string().green().bold());

    Ok(())
}
