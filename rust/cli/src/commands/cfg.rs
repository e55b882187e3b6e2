//! `roach cfg`: prints the resolved configuration as pretty JSON, each value
//! paired with the layer that set it.
//!
//! ```json
//! {
//!   "seats": { "value": 3, "source": "default" },
//!   "seed": { "value": 42, "source": "env" },
//!   "agent": { "value": "baseline", "source": "file" }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seats": {
            "value": config.seats,
            "source": sources.seats,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "agent": {
            "value": config.agent,
            "source": sources.agent,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
