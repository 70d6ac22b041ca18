//! Command line flags layered over environment configuration.
use clap::Parser;
use client_bootstrap::SessionConfig;

/// Hunt the Wumpus in a cave of twenty rooms
#[derive(Clone, Debug, Default, Parser)]
#[command(name = "wumpus")]
#[command(version, long_about = None)]
pub struct CliArgs {
    /// Seed for hazard placement and every random roll [env: WUMPUS_SEED]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Built-in cave map to play on [env: WUMPUS_MAP]
    #[arg(long)]
    pub map: Option<String>,

    /// Do not offer to review the game when it ends
    #[arg(long)]
    pub no_replay: bool,

    /// Replay without waiting for Enter between turns
    #[arg(long)]
    pub no_pause: bool,

    /// Print the recorded decisions as JSON lines after the game
    #[arg(long)]
    pub transcript: bool,

    /// List the built-in cave maps and exit
    #[arg(long)]
    pub list_maps: bool,
}

impl CliArgs {
    /// Overrides `config` with every flag that was given.
    pub fn apply(&self, mut config: SessionConfig) -> SessionConfig {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(map) = &self.map {
            config.map = map.clone();
        }
        if self.no_replay {
            config.offer_replay = false;
        }
        if self.no_pause {
            config.replay_pause = false;
        }
        config
    }
}
