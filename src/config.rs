use crate::error::{Error, Result};
use crate::list::DEFAULT_SEPARATOR;

pub const PROMPT_VAR: &str = "LSTACK_PROMPT";
pub const SEPARATOR_VAR: &str = "LSTACK_SEPARATOR";
pub const HISTORY_VAR: &str = "LSTACK_HISTORY";

const DEFAULT_PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub prompt: String,
    pub separator: String,
    pub history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            history: true,
        }
    }
}

impl Config {
    /// Builds a config from `(key, value)` pairs; keys it does not know are skipped.
    pub fn build<I, K, V>(vars: I) -> Result<Config>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Config::default();

        for (key, value) in vars {
            let value: String = value.into();
            match key.as_ref() {
                PROMPT_VAR => config.prompt = value,
                SEPARATOR_VAR => config.separator = value,
                HISTORY_VAR => config.history = parse_switch(&value)?,
                _ => {}
            }
        }

        Ok(config)
    }

    pub fn from_env() -> Result<Config> {
        Self::build(std::env::vars())
    }
}

fn parse_switch(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        other => Err(Error::Parse(format!(
            "{} must be on or off, got '{}'",
            HISTORY_VAR, other
        ))),
    }
}
