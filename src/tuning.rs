//! Data-driven game balance
//!
//! Every number the simulation uses lives here so it can be tweaked from a
//! JSON file without recompiling. Missing fields fall back to the defaults in
//! [`crate::consts`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Spawn and animation settings for one entity pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolTuning {
    /// Ticks between spawns
    pub spawn_period: u32,
    /// Frames laid out horizontally in the sprite sheet
    pub frames: u32,
    /// Ticks each frame stays on screen
    pub ticks_per_frame: u32,
    /// Natural size is divided by this when drawn
    pub scale: f32,
    /// Top of the vertical spawn band, as a fraction of viewport height
    pub band_top: f32,
    /// Bottom of the vertical spawn band, as a fraction of viewport height
    pub band_bottom: f32,
    /// Largest distance (pixels) past the right edge a sprite may start at
    pub max_lead: f32,
}

impl Default for PoolTuning {
    fn default() -> Self {
        Self {
            spawn_period: SPAWN_PERIOD,
            frames: 1,
            ticks_per_frame: 4,
            scale: 1.0,
            band_top: 0.1,
            band_bottom: 0.7,
            max_lead: 200.0,
        }
    }
}

/// Fields a tuning file may set on a pool; the rest come from the preset
#[derive(Debug, Deserialize)]
struct PoolOverrides {
    spawn_period: Option<u32>,
    frames: Option<u32>,
    ticks_per_frame: Option<u32>,
    scale: Option<f32>,
    band_top: Option<f32>,
    band_bottom: Option<f32>,
    max_lead: Option<f32>,
}

impl PoolOverrides {
    fn apply(self, preset: PoolTuning) -> PoolTuning {
        PoolTuning {
            spawn_period: self.spawn_period.unwrap_or(preset.spawn_period),
            frames: self.frames.unwrap_or(preset.frames),
            ticks_per_frame: self.ticks_per_frame.unwrap_or(preset.ticks_per_frame),
            scale: self.scale.unwrap_or(preset.scale),
            band_top: self.band_top.unwrap_or(preset.band_top),
            band_bottom: self.band_bottom.unwrap_or(preset.band_bottom),
            max_lead: self.max_lead.unwrap_or(preset.max_lead),
        }
    }
}

fn coins_over_preset<'de, D: Deserializer<'de>>(d: D) -> Result<PoolTuning, D::Error> {
    Ok(PoolOverrides::deserialize(d)?.apply(PoolTuning::coins()))
}

fn bombs_over_preset<'de, D: Deserializer<'de>>(d: D) -> Result<PoolTuning, D::Error> {
    Ok(PoolOverrides::deserialize(d)?.apply(PoolTuning::bombs()))
}

impl PoolTuning {
    /// Spinning coin sheet
    pub fn coins() -> Self {
        Self {
            frames: 10,
            ticks_per_frame: 2,
            scale: 4.0,
            band_top: 0.1,
            band_bottom: 0.6,
            ..Self::default()
        }
    }

    /// Fizzing bomb sheet
    pub fn bombs() -> Self {
        Self {
            frames: 4,
            ticks_per_frame: 5,
            scale: 3.0,
            band_top: 0.05,
            band_bottom: 0.7,
            max_lead: 400.0,
            ..Self::default()
        }
    }

    fn validate(&self, field: &'static str) -> Result<(), TuningError> {
        let invalid = |reason: &str| TuningError::Invalid {
            field,
            reason: reason.to_string(),
        };
        if self.spawn_period == 0 {
            return Err(invalid("spawn_period must be positive"));
        }
        if self.frames == 0 {
            return Err(invalid("frames must be positive"));
        }
        if self.ticks_per_frame == 0 {
            return Err(invalid("ticks_per_frame must be positive"));
        }
        if self.scale <= 0.0 {
            return Err(invalid("scale must be positive"));
        }
        if !(0.0..=1.0).contains(&self.band_top)
            || !(0.0..=1.0).contains(&self.band_bottom)
            || self.band_top > self.band_bottom
        {
            return Err(invalid("spawn band must satisfy 0 <= top <= bottom <= 1"));
        }
        if self.max_lead < 0.0 {
            return Err(invalid("max_lead must not be negative"));
        }
        Ok(())
    }
}

/// Complete balance sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Buoyancy ===
    pub gravity: f32,
    pub mass: f32,
    pub volume: f32,
    pub damping: f32,
    pub cooling: f32,
    pub heating_decay: f32,
    pub burner_heat: f32,
    pub max_heating: f32,

    // === Balloon ===
    pub start_altitude: f32,
    pub start_temperature: f32,
    pub start_lives: u8,
    /// Balloon image natural size is divided by this when drawn
    pub balloon_scale: f32,
    /// Horizontal balloon position as a fraction of viewport width
    pub balloon_x: f32,

    // === Scrolling ===
    /// Scroll speed = viewport width / scroll_divisor (pixels per tick)
    pub scroll_divisor: f32,

    // === Pools ===
    /// Partial pool sections only override the fields they name
    #[serde(deserialize_with = "coins_over_preset")]
    pub coins: PoolTuning,
    #[serde(deserialize_with = "bombs_over_preset")]
    pub bombs: PoolTuning,

    /// Outline collision circles when drawing
    pub debug_collision: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            mass: BALLOON_MASS,
            volume: BALLOON_VOLUME,
            damping: ALTITUDE_DAMPING,
            cooling: COOLING_RATE,
            heating_decay: HEATING_DECAY,
            burner_heat: BURNER_HEAT,
            max_heating: MAX_HEATING,

            start_altitude: START_ALTITUDE,
            start_temperature: START_TEMPERATURE,
            start_lives: START_LIVES,
            balloon_scale: 4.0,
            balloon_x: 0.2,

            scroll_divisor: SCROLL_DIVISOR,

            coins: PoolTuning::coins(),
            bombs: PoolTuning::bombs(),

            debug_collision: false,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("gravity", self.gravity),
            ("mass", self.mass),
            ("volume", self.volume),
            ("damping", self.damping),
            ("balloon_scale", self.balloon_scale),
            ("scroll_divisor", self.scroll_divisor),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: format!("must be positive, got {value}"),
                });
            }
        }

        if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&self.start_temperature) {
            return Err(TuningError::Invalid {
                field: "start_temperature",
                reason: format!(
                    "must lie in [{MIN_TEMPERATURE}, {MAX_TEMPERATURE}], got {}",
                    self.start_temperature
                ),
            });
        }
        if self.start_altitude < 0.0 {
            return Err(TuningError::Invalid {
                field: "start_altitude",
                reason: "must not be negative".to_string(),
            });
        }
        if self.start_lives == 0 {
            return Err(TuningError::Invalid {
                field: "start_lives",
                reason: "must be at least 1".to_string(),
            });
        }
        let rates = [
            ("cooling", self.cooling),
            ("heating_decay", self.heating_decay),
            ("burner_heat", self.burner_heat),
            ("max_heating", self.max_heating),
        ];
        for (field, value) in rates {
            if value < 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: format!("must not be negative, got {value}"),
                });
            }
        }

        self.coins.validate("coins")?;
        self.bombs.validate("bombs")?;
        Ok(())
    }
}
