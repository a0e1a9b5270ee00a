use colored::Colorize;

use sietch_mechanics::MechError;
use sietch_mechanics::combat::{Cover, RangeBand, range_modifiers};

use super::Session;

pub fn run(session: &Session, range: &str, cover: &str) -> Result<(), String> {
    let range: RangeBand = range.parse().map_err(|e: MechError| e.to_string())?;
    let cover: Cover = cover.parse().map_err(|e: MechError| e.to_string())?;
    let modifier = range_modifiers(range, cover);

    if session.emit_json(&modifier)? {
        return Ok(());
    }

    println!(
        "  {} {}",
        "Difficulty".bold(),
        modifier.difficulty.to_string().yellow().bold()
    );
    println!("  {}", modifier.description);

    Ok(())
}
