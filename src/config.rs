//! Game configuration
//!
//! Every tunable number lives in `GameConfig`. The defaults reproduce the
//! shipped game; a `config.json` can override any subset of fields.
//!
//! # Example
//!
//! ```json
//! {
//!     "helicopter_speed": 6.0,
//!     "spawn": { "initial_rate": 45, "min_rate": 10 }
//! }
//! ```

use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE_NAME: &str = "config.json";
const APP_DIR_NAME: &str = "heli-storm";

/// Width and height of a sprite in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSize {
    pub width: u32,
    pub height: u32,
}

impl SpriteSize {
    pub const fn new(width: u32, height: u32) -> Self {
        SpriteSize { width, height }
    }
}

/// Difficulty curve for tornado spawning (all rates are in frames)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Frames between spawns at the start of a run
    pub initial_rate: u32,
    /// Floor the interval never drops below
    pub min_rate: u32,
    /// Seconds of play between each difficulty step
    pub difficulty_interval: u32,
    /// Frames removed from the interval per difficulty step
    pub step: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        SpawnConfig {
            initial_rate: 60,
            min_rate: 15,
            difficulty_interval: 10,
            step: 5,
        }
    }
}

/// Image paths for the preloaded sprites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub boat: String,
    pub helicopter: String,
    pub rotor: String,
    pub tornado: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            boat: "assets/images/boat-sprite.png".to_string(),
            helicopter: "assets/images/heli-sprite.png".to_string(),
            rotor: "assets/images/rotor-sprite.png".to_string(),
            tornado: "assets/images/tornado-sprite.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub fps: u32,

    pub boat_size: SpriteSize,
    pub helicopter_size: SpriteSize,
    pub rotor_size: SpriteSize,

    /// Pixels per frame while a direction key is held
    pub helicopter_speed: f32,
    /// Pixels per frame the helicopter climbs during take-off
    pub intro_rise_rate: f32,
    /// Rotor speed reached while warming up on the deck (degrees per frame)
    pub rotor_warmup_speed: f32,
    /// Rotor speed during take-off and normal play (degrees per frame)
    pub rotor_flight_speed: f32,

    /// Collision radius of a tornado
    pub tornado_radius: f32,
    /// Pixels per frame a tornado falls
    pub tornado_fall_speed: f32,
    /// Degrees per frame a tornado sprite spins
    pub tornado_spin_step: f32,
    pub spawn: SpawnConfig,

    pub assets: AssetPaths,
    pub mission_lines: Vec<String>,

    /// Fixed RNG seed for reproducible runs; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_width: 800,
            window_height: 600,
            fps: 60,
            boat_size: SpriteSize::new(103, 212),
            helicopter_size: SpriteSize::new(52, 104),
            rotor_size: SpriteSize::new(92, 92),
            helicopter_speed: 5.0,
            intro_rise_rate: 2.3,
            rotor_warmup_speed: 15.0,
            rotor_flight_speed: 30.0,
            tornado_radius: 20.0,
            tornado_fall_speed: 4.0,
            tornado_spin_step: 5.0,
            spawn: SpawnConfig::default(),
            assets: AssetPaths::default(),
            mission_lines: vec![
                "A STORM FRONT IS MOVING IN OVER THE SEA.".to_string(),
                "TAKE OFF FROM THE BOAT AND SCOUT THE AREA.".to_string(),
                "STEER WITH THE ARROW KEYS.".to_string(),
                "AVOID THE TORNADOES FOR AS LONG AS YOU CAN.".to_string(),
            ],
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parses a JSON configuration file. Missing fields keep their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the first config file found, or the defaults when there is none.
    ///
    /// Search order: the user config directory, then the working directory.
    /// A file that exists but fails to parse is an error, not a fallback.
    pub fn load_or_default() -> Result<Self> {
        for path in Self::candidate_paths() {
            if path.is_file() {
                log::info!("Loading configuration from {}", path.display());
                return Self::load_from_file(&path);
            }
        }
        log::warn!("No {} found, using default configuration", CONFIG_FILE_NAME);
        Ok(GameConfig::default())
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(2);
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
        }
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
        paths
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(GameError::Config("window size must be non-zero".to_string()));
        }
        if self.fps == 0 {
            return Err(GameError::Config("fps must be non-zero".to_string()));
        }
        for (name, size) in [
            ("boat_size", self.boat_size),
            ("helicopter_size", self.helicopter_size),
            ("rotor_size", self.rotor_size),
        ] {
            if size.width == 0 || size.height == 0 {
                return Err(GameError::Config(format!("{} must be non-zero", name)));
            }
        }
        if self.tornado_radius <= 0.0 {
            return Err(GameError::Config("tornado_radius must be positive".to_string()));
        }
        if self.spawn.min_rate == 0 {
            return Err(GameError::Config("spawn.min_rate must be non-zero".to_string()));
        }
        if self.spawn.min_rate > self.spawn.initial_rate {
            return Err(GameError::Config(format!(
                "spawn.min_rate ({}) exceeds spawn.initial_rate ({})",
                self.spawn.min_rate, self.spawn.initial_rate
            )));
        }
        if self.spawn.difficulty_interval == 0 {
            return Err(GameError::Config(
                "spawn.difficulty_interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn field_width(&self) -> f32 {
        self.window_width as f32
    }

    pub fn field_height(&self) -> f32 {
        self.window_height as f32
    }

    /// Top-left of the boat, centred in the play field
    pub fn boat_position(&self) -> (f32, f32) {
        (
            (self.field_width() - self.boat_size.width as f32) / 2.0,
            (self.field_height() - self.boat_size.height as f32) / 2.0,
        )
    }

    /// Top-left of the helicopter parked on the boat deck
    ///
    /// Also the respawn point for every new run.
    pub fn helicopter_start(&self) -> (f32, f32) {
        let (boat_x, boat_y) = self.boat_position();
        let boat_width = self.boat_size.width as f32;
        let heli_width = self.helicopter_size.width as f32;
        let heli_height = self.helicopter_size.height as f32;
        (
            boat_x + (boat_width - heli_width) / 2.0,
            boat_y + heli_height - 30.0,
        )
    }

    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_helicopter_start_on_boat_deck() {
        let config = GameConfig::default();
        let (boat_x, boat_y) = config.boat_position();
        assert_relative_eq!(boat_x, 348.5);
        assert_relative_eq!(boat_y, 194.0);

        let (heli_x, heli_y) = config.helicopter_start();
        assert_relative_eq!(heli_x, 374.0);
        assert_relative_eq!(heli_y, 268.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "helicopter_speed": 7.5, "spawn": { "min_rate": 20 } }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();

        assert_relative_eq!(config.helicopter_speed, 7.5);
        assert_eq!(config.spawn.min_rate, 20);
        assert_eq!(config.spawn.initial_rate, 60);
        assert_eq!(config.window_width, 800);
    }

    #[test]
    fn test_rejects_inverted_spawn_curve() {
        let mut config = GameConfig::default();
        config.spawn.min_rate = 90;
        assert!(matches!(config.validate(), Err(GameError::Config(_))));
    }

    #[test]
    fn test_frame_budget() {
        let config = GameConfig::default();
        assert_eq!(config.frame_budget(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let result = GameConfig::load_from_file("does/not/exist/config.json");
        assert!(matches!(result, Err(GameError::Io(_))));
    }
}
