//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value paired with its
//! source (`default`, `file` or `env`).

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;

    let display = serde_json::json!({
        "player_name": {
            "value": config.player_name,
            "source": sources.player_name,
        },
        "decks": {
            "value": config.decks,
            "source": sources.decks,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "reshuffle_below": {
            "value": config.reshuffle_below,
            "source": sources.reshuffle_below,
        },
        "name_limit": {
            "value": config.name_limit,
            "source": sources.name_limit,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_displays_json_output() {
        let mut out = Vec::new();
        handle_cfg_command(&mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");
        for key in ["player_name", "decks", "seed", "reshuffle_below", "name_limit"] {
            assert!(json[key]["source"].is_string(), "missing source for {key}");
        }
    }
}
