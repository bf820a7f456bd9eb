//! Loading the event collection a command works on.

use anyhow::{Context, Result};
use calboard_core::EventStore;
use calboard_core::config::CalboardConfig;
use calboard_core::document;
use calboard_core::ids::IdGenerator;
use calboard_core::sample::sample_events;
use tracing::debug;

use crate::SourceArgs;

pub type Store = EventStore<Box<dyn IdGenerator>>;

/// Build the store from `--file`, then `events_file` from config, then the
/// built-in sample events.
pub fn load(args: &SourceArgs, config: &CalboardConfig) -> Result<Store> {
    let ids = config.id_strategy.generator();

    match args.file.clone().or_else(|| config.events_path()) {
        Some(path) => {
            debug!(path = %path.display(), "reading events");
            document::load_store(&path, ids)
                .with_context(|| format!("Failed to load events from {}", path.display()))
        }
        None => {
            debug!("no events file configured, using sample events");
            EventStore::with_events(ids, sample_events()).context("Invalid sample events")
        }
    }
}
