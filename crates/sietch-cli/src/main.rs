//! Command-line front end for the sietch dice engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::Session;

#[derive(Parser)]
#[command(
    name = "sietch",
    about = "Sietch: dice for Dune 2d20, World of Darkness, and plain polyhedrals",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// RNG seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Most extra dice an exploding roll may add
    #[arg(long, global = true, conflicts_with = "no_explosion_cap")]
    max_explosions: Option<u32>,

    /// Let exploding chains run uncapped
    #[arg(long, global = true)]
    no_explosion_cap: bool,

    /// Log evaluation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice from notation such as 3d6, 2d10+5, or d20-2
    Roll {
        /// Dice notation
        #[arg(allow_hyphen_values = true)]
        notation: String,

        /// Reroll and add every die that shows its maximum
        #[arg(short, long)]
        exploding: bool,
    },

    /// Roll a World of Darkness d10 pool
    Wod {
        /// Number of d10s
        pool: u32,

        /// Face needed for a success (1-10)
        #[arg(short, long, default_value_t = sietch_mechanics::validate::DEFAULT_WOD_DIFFICULTY)]
        difficulty: u32,

        /// Count 10s as two successes
        #[arg(short, long)]
        specialty: bool,
    },

    /// Roll Dune 2d20 against a target number
    Dune {
        /// Target number (attribute plus skill)
        target: u32,

        /// Extra d20s beyond the base two
        #[arg(short, long, default_value_t = 0)]
        bonus: u32,
    },

    /// Run a full Dune test for a character sheet
    Test {
        /// Character sheet (JSON)
        #[arg(long)]
        sheet: PathBuf,

        /// Attribute or drive to test
        #[arg(short, long)]
        attribute: String,

        /// Skill to test
        #[arg(short, long)]
        skill: String,

        /// Successes required
        #[arg(short, long, default_value_t = 1)]
        difficulty: u32,

        /// Extra d20s beyond the base two
        #[arg(short, long, default_value_t = 0)]
        bonus: u32,

        /// Asset brought to bear (repeatable)
        #[arg(long = "asset")]
        assets: Vec<String>,

        /// Trait invoked (repeatable)
        #[arg(long = "trait")]
        traits: Vec<String>,

        /// Spend a point of Determination
        #[arg(long)]
        determination: bool,

        /// Lowest face that counts as a complication
        #[arg(long, default_value_t = 20)]
        complication_range: u32,
    },

    /// Roll damage and effects for an attack
    Damage {
        /// Base damage
        base: u32,

        /// Base effects
        #[arg(short, long, default_value_t = 0)]
        effects: u32,

        /// Weapon quality such as vicious or piercing (repeatable)
        #[arg(short, long = "quality")]
        qualities: Vec<String>,
    },

    /// Generate an NPC stat block
    Npc {
        /// Tier: minion, toughened, or nemesis
        tier: String,

        /// One-line concept
        concept: String,
    },

    /// Roll a quick supporting-character test for an NPC
    NpcTest {
        /// Tier: minion, toughened, or nemesis
        tier: String,

        /// The NPC has a relevant asset
        #[arg(long)]
        asset: bool,

        /// Successes required
        #[arg(short, long, default_value_t = 1)]
        difficulty: u32,
    },

    /// Show the difficulty of a ranged attack
    Range {
        /// Range band: close, medium, long, or extreme
        range: String,

        /// Cover: none, light, heavy, or total
        #[arg(short, long, default_value = "none")]
        cover: String,
    },
}

/// Send logs to stderr, filtered by `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "sietch_mechanics=debug,sietch=debug"
    } else {
        "sietch_mechanics=warn,sietch=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let mut session = Session::new(
        cli.global.seed,
        cli.global.json,
        cli.global.max_explosions,
        cli.global.no_explosion_cap,
    );

    let result = match cli.command {
        Commands::Roll {
            notation,
            exploding,
        } => commands::roll::run(&mut session, &notation, exploding),
        Commands::Wod {
            pool,
            difficulty,
            specialty,
        } => commands::wod::run(&mut session, pool, difficulty, specialty),
        Commands::Dune { target, bonus } => commands::dune::run(&mut session, target, bonus),
        Commands::Test {
            sheet,
            attribute,
            skill,
            difficulty,
            bonus,
            assets,
            traits,
            determination,
            complication_range,
        } => {
            let request = commands::test::TestRequest {
                attribute,
                skill,
                difficulty,
                bonus,
                assets,
                traits,
                determination,
                complication_range,
            };
            commands::test::run(&mut session, &sheet, request)
        }
        Commands::Damage {
            base,
            effects,
            qualities,
        } => commands::damage::run(&mut session, base, effects, &qualities),
        Commands::Npc { tier, concept } => commands::npc::run_generate(&session, &tier, &concept),
        Commands::NpcTest {
            tier,
            asset,
            difficulty,
        } => commands::npc::run_test(&mut session, &tier, asset, difficulty),
        Commands::Range { range, cover } => commands::range::run(&session, &range, &cover),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
