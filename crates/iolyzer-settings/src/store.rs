use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::settings::DecoderSettings;

/// Single source of truth for the current decoder settings.
///
/// Written only by the [`crate::AutoSettingsAdapter`]; read by the dispatch
/// registry and by the external octet-stream decoder. `set` replaces the
/// whole value, so readers never observe a partial update. The store itself
/// performs no validation.
#[derive(Debug)]
pub struct SettingsStore {
    current: Mutex<DecoderSettings>,
    generation: AtomicU64,
}

/// Shared handle to a settings store.
pub type SharedSettings = Arc<SettingsStore>;

impl SettingsStore {
    pub fn new(initial: DecoderSettings) -> Self {
        Self {
            current: Mutex::new(initial),
            generation: AtomicU64::new(0),
        }
    }

    /// Current settings value.
    pub fn get(&self) -> DecoderSettings {
        *self.current.lock().unwrap_or_else(|err| err.into_inner())
    }

    /// Replace the settings value and bump the generation counter.
    pub fn set(&self, settings: DecoderSettings) {
        *self.current.lock().unwrap_or_else(|err| err.into_inner()) = settings;
        self.generation.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of `set` calls so far. Lets callers detect "nothing changed"
    /// without comparing values structurally.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Relaxed)
    }
}
