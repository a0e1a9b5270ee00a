use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use sietch_mechanics::resolution::count::{BASE_DICE, D20};
use sietch_mechanics::{Character, MomentumPool, Outcome, TestOptions, TestResult, perform_test};

use super::{Session, faces};

/// Flags for a single `test` invocation.
pub struct TestRequest {
    pub attribute: String,
    pub skill: String,
    pub difficulty: u32,
    pub bonus: u32,
    pub assets: Vec<String>,
    pub traits: Vec<String>,
    pub determination: bool,
    pub complication_range: u32,
}

impl TestRequest {
    fn options(&self) -> TestOptions {
        let mut options = TestOptions::default()
            .with_difficulty(self.difficulty)
            .with_bonus_dice(self.bonus)
            .with_complication_range(self.complication_range);
        for asset in &self.assets {
            options = options.with_asset(asset.as_str());
        }
        for name in &self.traits {
            options = options.with_trait(name.as_str());
        }
        if self.determination {
            options = options.with_determination();
        }
        options
    }
}

pub fn run(session: &mut Session, sheet: &Path, request: TestRequest) -> Result<(), String> {
    let json = std::fs::read_to_string(sheet)
        .map_err(|e| format!("cannot read {}: {e}", sheet.display()))?;
    let mut character = Character::from_json(&json).map_err(|e| e.to_string())?;

    if request.determination {
        if character.determination == 0 {
            return Err(format!("{} has no Determination to spend", character.name));
        }
        character.determination -= 1;
    }
    session
        .config
        .validate_dice(BASE_DICE.saturating_add(request.bonus), D20)
        .map_err(|e| e.to_string())?;

    let options = request.options();
    let result = perform_test(
        &character,
        &request.attribute,
        &request.skill,
        &options,
        &mut session.rng,
    );

    if session.emit_json(&result)? {
        return Ok(());
    }

    print_result(&character, &request, &result);
    Ok(())
}

fn print_result(character: &Character, request: &TestRequest, result: &TestResult) {
    let title = format!(
        "{}: {} + {} (TN {}, difficulty {})",
        character.name,
        request.attribute,
        request.skill,
        result.details.target_number,
        result.details.difficulty
    );
    println!("  {}", title.bold());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Dice", "Successes", "Complications", "Momentum", "Threat"]);
    table.add_row(vec![
        format!("[{}]", faces(&result.rolls)),
        result.successes.to_string(),
        result.complications.to_string(),
        result.momentum.to_string(),
        result.threat.to_string(),
    ]);
    println!("{table}");

    let verdict = result.outcome.to_string();
    let verdict = match result.outcome {
        Outcome::CriticalSuccess { .. } | Outcome::Success { .. } => verdict.green().bold(),
        Outcome::Partial => verdict.yellow(),
        Outcome::Failure => verdict.red(),
        Outcome::CriticalFailure => verdict.red().bold(),
    };
    println!("  {verdict}");
    println!("  {}", result.narrative.italic());

    if !result.details.assets.is_empty() {
        println!("  {} {}", "Assets:".dimmed(), result.details.assets.join(", "));
    }
    if !result.details.traits.is_empty() {
        println!("  {} {}", "Traits:".dimmed(), result.details.traits.join(", "));
    }
    if result.details.determination {
        println!(
            "  {} {} left",
            "Determination spent,".dimmed(),
            character.determination
        );
    }

    let mut pool = MomentumPool::default();
    let lost = pool.apply(result);
    println!("  {pool}");
    if lost > 0 {
        println!("  {}", format!("{lost} momentum lost to the cap").yellow());
    }
}
