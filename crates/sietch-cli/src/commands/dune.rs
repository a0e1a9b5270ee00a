use colored::Colorize;

use sietch_mechanics::dune_2d20_roll;
use sietch_mechanics::resolution::count::{BASE_DICE, D20};

use super::{Session, faces};

pub fn run(session: &mut Session, target: u32, bonus: u32) -> Result<(), String> {
    session
        .config
        .validate_dice(BASE_DICE.saturating_add(bonus), D20)
        .map_err(|e| e.to_string())?;
    let result = dune_2d20_roll(target, bonus, &mut session.rng);

    if session.emit_json(&result)? {
        return Ok(());
    }

    println!("  {} [{}]", format!("2d20 vs {target}").bold(), faces(&result.rolls));
    if bonus > 0 {
        println!(
            "  {} [{}]",
            "Best two:".dimmed(),
            faces(&result.main_pair())
        );
    }
    let successes = format!("{} successes", result.successes);
    if result.successes > 0 {
        println!("  {}", successes.green().bold());
    } else {
        println!("  {}", successes.yellow());
    }
    if result.complications > 0 {
        println!(
            "  {}",
            format!("{} complications", result.complications).red()
        );
    }

    Ok(())
}
