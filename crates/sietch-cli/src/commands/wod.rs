use colored::Colorize;

use sietch_mechanics::{validate_wod_parameters, world_of_darkness_roll};

use super::{Session, faces};

pub fn run(session: &mut Session, pool: u32, difficulty: u32, specialty: bool) -> Result<(), String> {
    validate_wod_parameters(pool, difficulty).map_err(|e| e.to_string())?;
    let result = world_of_darkness_roll(pool, difficulty, specialty, &mut session.rng);

    if session.emit_json(&result)? {
        return Ok(());
    }

    let label = format!("{pool}d10 vs {difficulty}");
    println!("  {} [{}]", label.bold(), faces(&result.rolls));
    if result.botch {
        println!("  {}", "BOTCH".red().bold());
    } else if result.successes == 0 {
        println!("  {}", "Failure".yellow());
    } else {
        let plural = if result.successes == 1 { "" } else { "es" };
        println!(
            "  {}",
            format!("{} success{plural}", result.successes).green().bold()
        );
    }

    Ok(())
}
