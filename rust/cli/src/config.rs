//! Session defaults from a TOML file and `BLACKJACK_*` environment
//! variables. Environment values override the file; command-line flags
//! override both and are applied by the command handlers.

use blackjack_engine::hand::NAME_DISPLAY_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;

/// Largest shoe the CLI will build.
pub const MAX_DECKS: u16 = 8;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub player_name: String,
    pub decks: u16,
    pub seed: Option<u64>,
    /// Refill the shoe before a deal once fewer cards than this remain
    pub reshuffle_below: Option<usize>,
    pub name_limit: usize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub player_name: ValueSource,
    pub decks: ValueSource,
    pub seed: ValueSource,
    pub reshuffle_below: ValueSource,
    pub name_limit: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            player_name: ValueSource::Default,
            decks: ValueSource::Default,
            seed: ValueSource::Default,
            reshuffle_below: ValueSource::Default,
            name_limit: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: "You".into(),
            decks: 1,
            seed: None,
            reshuffle_below: None,
            name_limit: NAME_DISPLAY_LIMIT,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("BLACKJACK_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.player_name {
            cfg.player_name = v;
            sources.player_name = ValueSource::File;
        }
        if let Some(v) = f.decks {
            cfg.decks = v;
            sources.decks = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.reshuffle_below {
            cfg.reshuffle_below = Some(v);
            sources.reshuffle_below = ValueSource::File;
        }
        if let Some(v) = f.name_limit {
            cfg.name_limit = v;
            sources.name_limit = ValueSource::File;
        }
    }

    if let Ok(name) = std::env::var("BLACKJACK_PLAYER_NAME")
        && !name.is_empty()
    {
        cfg.player_name = name;
        sources.player_name = ValueSource::Env;
    }
    if let Ok(decks) = std::env::var("BLACKJACK_DECKS")
        && !decks.is_empty()
    {
        cfg.decks = decks
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid decks".into()))?;
        sources.decks = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("BLACKJACK_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(below) = std::env::var("BLACKJACK_RESHUFFLE_BELOW")
        && !below.is_empty()
    {
        cfg.reshuffle_below = Some(
            below
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid reshuffle_below".into()))?,
        );
        sources.reshuffle_below = ValueSource::Env;
    }
    if let Ok(limit) = std::env::var("BLACKJACK_NAME_LIMIT")
        && !limit.is_empty()
    {
        cfg.name_limit = limit
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid name_limit".into()))?;
        sources.name_limit = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    player_name: Option<String>,
    #[serde(default)]
    decks: Option<u16>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    reshuffle_below: Option<usize>,
    #[serde(default)]
    name_limit: Option<usize>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.decks == 0 || cfg.decks > MAX_DECKS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: decks must be between 1 and {}",
            MAX_DECKS
        )));
    }
    if cfg.name_limit == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: name_limit must be >=1".into(),
        ));
    }
    if cfg.player_name.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player_name must not be empty".into(),
        ));
    }
    Ok(())
}
