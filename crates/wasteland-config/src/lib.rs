//! Wasteland mod configuration: TOML schema, load-time validation, and a
//! reloadable snapshot handle.
//!
//! All five tunables have defaults, so a missing file section (or a missing
//! field) parses to the shipped behavior. Range bounds are enforced at load
//! time; the rules never observe an out-of-range value.

use std::path::Path;
use std::sync::{Arc, RwLock};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

/// Allowed range for `water_radiation.poison_duration_ticks` (20 ticks = 1 s).
pub const POISON_DURATION_RANGE: (u32, u32) = (10, 12_000);
/// Allowed range for `water_radiation.poison_amplifier` (0 = Poison I).
pub const POISON_AMPLIFIER_RANGE: (u8, u8) = (0, 4);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{key} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        key: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WastelandConfig {
    #[serde(default)]
    pub worldgen: WorldgenSection,
    #[serde(default)]
    pub spawns: SpawnsSection,
    #[serde(default)]
    pub water_radiation: WaterRadiationSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorldgenSection {
    /// Allow other mods' structures to generate in the wasteland biome.
    /// Takes effect on the next data reload.
    #[serde(default)]
    pub allow_external_structures: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpawnsSection {
    /// Opt-in: allow mobs from other mods to spawn naturally in the
    /// wasteland biome. Spawners and spawn eggs are never affected.
    #[serde(default)]
    pub allow_external_mobs: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WaterRadiationSection {
    /// Duration in ticks of the poison applied while in water in the
    /// wasteland biome.
    #[serde(default = "default_poison_duration_ticks")]
    pub poison_duration_ticks: u32,
    /// Amplifier of the poison effect (0 = Poison I, 1 = Poison II, ...).
    #[serde(default)]
    pub poison_amplifier: u8,
    /// If true, only players take water radiation. If false, all living
    /// entities do.
    #[serde(default = "default_affect_players_only")]
    pub affect_players_only: bool,
}

fn default_poison_duration_ticks() -> u32 {
    60
}

fn default_affect_players_only() -> bool {
    true
}

impl Default for WaterRadiationSection {
    fn default() -> Self {
        Self {
            poison_duration_ticks: default_poison_duration_ticks(),
            poison_amplifier: 0,
            affect_players_only: default_affect_players_only(),
        }
    }
}

impl WastelandConfig {
    /// Read, parse, and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate config text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the ranged fields. Called by [`load`](Self::load); also useful
    /// for hand-constructed configs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ticks = self.water_radiation.poison_duration_ticks;
        let (min, max) = POISON_DURATION_RANGE;
        if !(min..=max).contains(&ticks) {
            return Err(ConfigError::OutOfRange {
                key: "water_radiation.poison_duration_ticks",
                value: ticks as i64,
                min: min as i64,
                max: max as i64,
            });
        }

        let amplifier = self.water_radiation.poison_amplifier;
        let (min, max) = POISON_AMPLIFIER_RANGE;
        if !(min..=max).contains(&amplifier) {
            return Err(ConfigError::OutOfRange {
                key: "water_radiation.poison_amplifier",
                value: amplifier as i64,
                min: min as i64,
                max: max as i64,
            });
        }

        Ok(())
    }
}

/// Process-wide configuration store.
///
/// Rule evaluations take an [`Arc`] snapshot via [`current`](Self::current)
/// and read it to completion; [`reload`](Self::reload) swaps the whole
/// instance at once, so an in-flight evaluation sees either the old or the
/// new config, never a torn mix of fields. There is no runtime writer besides
/// reload.
#[derive(Debug)]
pub struct ConfigHandle {
    inner: RwLock<Arc<WastelandConfig>>,
}

impl ConfigHandle {
    pub fn new(config: WastelandConfig) -> Self {
        Self {
            inner: RwLock::new(Arc::new(config)),
        }
    }

    /// The current configuration snapshot.
    pub fn current(&self) -> Arc<WastelandConfig> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Load a new config file and swap it in. On any error the previous
    /// snapshot stays in place.
    pub fn reload<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        match WastelandConfig::load(path) {
            Ok(config) => {
                *self
                    .inner
                    .write()
                    .unwrap_or_else(|poisoned| poisoned.into_inner()) = Arc::new(config);
                info!("wasteland config reloaded");
                Ok(())
            }
            Err(e) => {
                warn!("wasteland config reload failed, keeping previous values: {e}");
                Err(e)
            }
        }
    }
}

impl Default for ConfigHandle {
    fn default() -> Self {
        Self::new(WastelandConfig::default())
    }
}
