//! Process configuration read from the environment.

use stockroom_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
pub const SEED_DEMO_VAR: &str = "STOCKROOM_SEED_DEMO";
pub const PROMPT_VAR: &str = "STOCKROOM_PROMPT";

/// Console settings. Every field has a default; nothing is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_format: LogFormat,
    pub seed_demo: bool,
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Json,
            seed_demo: false,
            prompt: "> ".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests).
    ///
    /// Returns the config plus a note for each value that was ignored; logging
    /// is not set up yet when this runs, so the caller reports them.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut ignored = Vec::new();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match LogFormat::parse(&raw) {
                Some(format) => config.log_format = format,
                None => ignored.push(format!("{LOG_FORMAT_VAR}={raw} not recognized; using json")),
            }
        }

        if let Some(raw) = lookup(SEED_DEMO_VAR) {
            config.seed_demo = is_truthy(&raw);
        }

        if let Some(prompt) = lookup(PROMPT_VAR) {
            config.prompt = prompt;
        }

        (config, ignored)
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
