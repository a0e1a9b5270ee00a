pub mod damage;
pub mod dune;
pub mod npc;
pub mod range;
pub mod roll;
pub mod test;
pub mod wod;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

use sietch_mechanics::EngineConfig;

/// State shared by every command for one invocation.
pub struct Session {
    pub rng: StdRng,
    pub config: EngineConfig,
    pub json: bool,
}

impl Session {
    /// Build a session from the global flags.
    pub fn new(
        seed: Option<u64>,
        json: bool,
        max_explosions: Option<u32>,
        no_explosion_cap: bool,
    ) -> Self {
        let rng = match seed {
            Some(seed) => {
                debug!(seed, "seeded rng");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let mut config = EngineConfig::default();
        if let Some(cap) = max_explosions {
            config = config.with_max_explosions(cap);
        }
        if no_explosion_cap {
            config = config.without_explosion_cap();
        }

        Self { rng, config, json }
    }

    /// Print `value` as pretty JSON when `--json` was given.
    ///
    /// Returns false when the caller should render text instead.
    pub fn emit_json<T: Serialize>(&self, value: &T) -> Result<bool, String> {
        if !self.json {
            return Ok(false);
        }
        let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
        println!("{text}");
        Ok(true)
    }
}

/// Join faces as `4, 2, 5`.
pub fn faces(rolls: &[u32]) -> String {
    rolls
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
