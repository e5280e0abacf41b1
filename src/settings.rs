//! Visual preferences
//!
//! Persisted in LocalStorage, separately from anything the embedding page
//! stores. Defaults reproduce the original design constants.

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::field::FieldConfig;

/// Dot density presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DensityPreset {
    Sparse,
    #[default]
    Normal,
    Dense,
}

impl DensityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            DensityPreset::Sparse => "Sparse",
            DensityPreset::Normal => "Normal",
            DensityPreset::Dense => "Dense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sparse" => Some(DensityPreset::Sparse),
            "normal" | "default" => Some(DensityPreset::Normal),
            "dense" => Some(DensityPreset::Dense),
            _ => None,
        }
    }

    /// Grid spacing for this preset (CSS pixels)
    pub fn spacing(&self) -> f32 {
        match self {
            DensityPreset::Sparse => 60.0,
            DensityPreset::Normal => consts::GRID_SPACING,
            DensityPreset::Dense => 30.0,
        }
    }
}

/// Background preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Dot density preset
    pub density: DensityPreset,
    /// Suppress the displacement offset (color/size response stays on)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            density: DensityPreset::Normal,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective displacement (respects reduced_motion)
    pub fn effective_displacement(&self) -> f32 {
        if self.reduced_motion {
            0.0
        } else {
            consts::MAX_DISPLACEMENT
        }
    }

    /// Field configuration with these preferences applied
    pub fn field_config(&self) -> FieldConfig {
        FieldConfig {
            spacing: self.density.spacing(),
            displacement: self.effective_displacement(),
            ..FieldConfig::default()
        }
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "pixel_field_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
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
