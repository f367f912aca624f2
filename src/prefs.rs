//! Audio preferences
//!
//! The only persisted state in the game: two booleans, stored under their own
//! LocalStorage keys so saves from older builds keep working. The simulation
//! core never reads or writes these; they belong to the audio collaborator.

use serde::{Deserialize, Serialize};

/// Persisted mute switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioPrefs {
    /// One-shot sound effects
    pub sfx_muted: bool,
    /// Continuous engine drone (off by default; it is an acquired taste)
    pub engine_muted: bool,
}

impl Default for AudioPrefs {
    fn default() -> Self {
        Self {
            sfx_muted: false,
            engine_muted: true,
        }
    }
}

impl AudioPrefs {
    const SFX_KEY: &'static str = "enduro_sfx_muted";
    const ENGINE_KEY: &'static str = "enduro_engine_muted";

    /// Load preferences from LocalStorage (WASM only).
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, using default audio prefs");
            return Self::default();
        };

        let defaults = Self::default();
        let read = |key: &str, default: bool| match storage.get_item(key) {
            Ok(Some(v)) => v == "true",
            _ => default,
        };
        Self {
            sfx_muted: read(Self::SFX_KEY, defaults.sfx_muted),
            engine_muted: read(Self::ENGINE_KEY, defaults.engine_muted),
        }
    }

    /// Save preferences to LocalStorage (WASM only).
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            let _ = storage.set_item(Self::SFX_KEY, &self.sfx_muted.to_string());
            let _ = storage.set_item(Self::ENGINE_KEY, &self.engine_muted.to_string());
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
