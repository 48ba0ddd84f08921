use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "wordmatch",
    version,
    about = "Match Russian words with their English translations"
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for reproducible shuffles (overrides game.seed)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Do not capture the mouse; play with the keyboard only
    #[arg(long)]
    pub no_mouse: bool,

    /// Print the first board as JSON and exit
    #[arg(long)]
    pub print_board: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Load the config file and apply command line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let config = Config::load_from(&self.config_path())?;
        Ok(self.apply_overrides(config))
    }

    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        if self.no_mouse {
            config.ui.mouse = false;
        }
        config
    }
}
