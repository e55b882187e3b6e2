//! Layered configuration: defaults, then a TOML file named by `ROACH_CONFIG`,
//! then `ROACH_SEATS` / `ROACH_SEED` / `ROACH_AGENT`. Each value remembers
//! which layer set it.

use serde::{Deserialize, Serialize};
use std::fs;

pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seats: usize,
    pub seed: Option<u64>,
    pub agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seats: 3,
            seed: None,
            agent: "baseline".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seats: ValueSource,
    pub seed: ValueSource,
    pub agent: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seats: ValueSource::Default,
            seed: ValueSource::Default,
            agent: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("ROACH_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seats {
            cfg.seats = v;
            sources.seats = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.agent {
            cfg.agent = v;
            sources.agent = ValueSource::File;
        }
    }

    if let Ok(seats) = std::env::var("ROACH_SEATS")
        && !seats.is_empty()
    {
        cfg.seats = seats
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid seats: {}", seats)))?;
        sources.seats = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("ROACH_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(agent) = std::env::var("ROACH_AGENT")
        && !agent.is_empty()
    {
        cfg.agent = agent.trim().to_string();
        sources.agent = ValueSource::Env;
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
    seats: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    agent: Option<String>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(MIN_SEATS..=MAX_SEATS).contains(&cfg.seats) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: seats must be between {} and {}, got {}",
            MIN_SEATS, MAX_SEATS, cfg.seats
        )));
    }
    if !roach_ai::is_known_kind(&cfg.agent) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown agent '{}' (expected one of: {})",
            cfg.agent,
            roach_ai::AGENT_KINDS.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = ["ROACH_CONFIG", "ROACH_SEATS", "ROACH_SEED", "ROACH_AGENT"];

    struct EnvGuard {
        restores: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn apply(pairs: &[(&'static str, &str)]) -> Self {
            let mut restores = Vec::new();
            for key in VARS {
                restores.push((key, std::env::var(key).ok()));
                unsafe { std::env::remove_var(key) };
            }
            for (key, value) in pairs {
                unsafe { std::env::set_var(key, value) };
            }
            EnvGuard { restores }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, previous) in self.restores.iter().rev() {
                match previous {
                    Some(val) => unsafe { std::env::set_var(key, val) },
                    None => unsafe { std::env::remove_var(key) },
                }
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_without_any_layer() {
        let _env = EnvGuard::apply(&[]);
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.seats, ValueSource::Default);
        assert_eq!(resolved.sources.agent, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roach.toml");
        std::fs::write(&path, "seats = 5\nseed = 9\nagent = \"random\"\n").unwrap();
        let _env = EnvGuard::apply(&[
            ("ROACH_CONFIG", path.to_str().unwrap()),
            ("ROACH_SEED", "77"),
        ]);

        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config.seats, 5);
        assert_eq!(resolved.sources.seats, ValueSource::File);
        assert_eq!(resolved.config.seed, Some(77));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.config.agent, "random");
        assert_eq!(resolved.sources.agent, ValueSource::File);
    }

    #[test]
    #[serial]
    fn rejects_out_of_range_seats() {
        let _env = EnvGuard::apply(&[("ROACH_SEATS", "9")]);
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
        let _env = EnvGuard::apply(&[("ROACH_SEATS", "many")]);
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    #[serial]
    fn rejects_unknown_agent() {
        let _env = EnvGuard::apply(&[("ROACH_AGENT", "oracle")]);
        let err = load().unwrap_err();
        assert!(err.to_string().contains("oracle"));
    }

    #[test]
    #[serial]
    fn unreadable_file_is_an_io_error() {
        let _env = EnvGuard::apply(&[("ROACH_CONFIG", "/nonexistent/roach.toml")]);
        assert!(matches!(load(), Err(ConfigError::Io(_))));
    }
}
