//! calboard configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{CalboardError, CalboardResult};
use crate::event::EventColor;
use crate::ids::IdStrategy;

/// Days shown by the agenda when no end date is given.
pub const DEFAULT_AGENDA_DAYS: u64 = 7;

fn default_agenda_days() -> u64 {
    DEFAULT_AGENDA_DAYS
}

/// Configuration at ~/.config/calboard/config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalboardConfig {
    /// JSON file holding the event collection. The built-in sample events
    /// are used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,

    #[serde(default)]
    pub id_strategy: IdStrategy,

    #[serde(default)]
    pub default_color: EventColor,

    #[serde(default = "default_agenda_days")]
    pub agenda_days: u64,
}

impl Default for CalboardConfig {
    fn default() -> Self {
        CalboardConfig {
            events_file: None,
            id_strategy: IdStrategy::default(),
            default_color: EventColor::default(),
            agenda_days: DEFAULT_AGENDA_DAYS,
        }
    }
}

impl CalboardConfig {
    pub fn config_path() -> CalboardResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalboardError::Config("Could not determine config directory".into()))?
            .join("calboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file gives the defaults.
    pub fn load() -> CalboardResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> CalboardResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| CalboardError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalboardError::Config(e.to_string()))
    }

    /// `events_file` with `~` expanded.
    pub fn events_path(&self) -> Option<PathBuf> {
        self.events_file
            .as_ref()
            .map(|p| PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalboardResult<()> {
        let contents = format!(
            "\
# calboard configuration

# JSON file with your events (the sample events are shown when unset):
# events_file = \"~/calendar/events.json\"

# How new event ids are generated: sequential, uuid or timestamp
# id_strategy = \"sequential\"

# Color for new events:
# default_color = \"{}\"

# Days shown by `calboard agenda` when no --to is given:
# agenda_days = {}
",
            EventColor::default(),
            DEFAULT_AGENDA_DAYS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalboardError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalboardError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
