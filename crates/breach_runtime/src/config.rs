//! Game configuration
//!
//! All gameplay tuning in one TOML document. Every section and field has a
//! default, so a partial file only overrides what it names.
//!
//! ```toml
//! frame_rate = 60
//!
//! [movement]
//! walk_speed = 4.5
//!
//! [dodge]
//! cooldown = 1.0
//!
//! [interaction]
//! block_until_mostly_open = true
//! ```

use crate::error::{read_file, Result};
use breach_interact::config::InteractionConfig;
use breach_physics::config::ColliderFilter;
use breach_player::config::{CameraConfig, DodgeConfig, MovementConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config files searched by [`GameConfig::load`], in order
pub const CONFIG_SEARCH_PATHS: &[&str] = &["breach.toml", "config/breach.toml"];

/// Complete gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed step rate used by the headless runner
    pub frame_rate: u32,
    /// Locomotion
    pub movement: MovementConfig,
    /// Dodge
    pub dodge: DodgeConfig,
    /// Camera rig
    pub camera: CameraConfig,
    /// Dynamic collider filtering
    pub colliders: ColliderFilter,
    /// Doors, terminals, crates
    pub interaction: InteractionConfig,
    /// Where this config came from (not serialized)
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            movement: MovementConfig::default(),
            dodge: DodgeConfig::default(),
            camera: CameraConfig::default(),
            colliders: ColliderFilter::default(),
            interaction: InteractionConfig::default(),
            source: None,
        }
    }
}

impl GameConfig {
    /// Search the default locations, falling back to built-in defaults.
    ///
    /// A file that exists but fails to parse is reported and skipped.
    pub fn load() -> Self {
        for path in CONFIG_SEARCH_PATHS {
            let path = Path::new(path);
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => log::warn!("Ignoring {}: {}", path.display(), e),
            }
        }
        log::info!("No config file found, using defaults");
        Self::default()
    }

    /// Load from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::from_toml_str(&read_file(path)?)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        if config.frame_rate == 0 {
            config.frame_rate = 60;
        }
        Ok(config)
    }

    /// Fixed step length in seconds
    pub fn frame_time(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }

    /// Print a one-screen summary (headless runner banner)
    pub fn print_summary(&self) {
        println!("Breach configuration:");
        match &self.source {
            Some(path) => println!("  Source:     {}", path.display()),
            None => println!("  Source:     built-in defaults"),
        }
        println!("  Frame rate: {} Hz", self.frame_rate);
        println!(
            "  Movement:   walk {:.1} m/s, sprint {:.1} m/s",
            self.movement.walk_speed, self.movement.sprint_speed
        );
        println!(
            "  Dodge:      {:.2}s at {:.1} m/s, {:.2}s cooldown",
            self.dodge.duration, self.dodge.speed, self.dodge.cooldown
        );
        println!("  Interact:   {:.1} m radius", self.interaction.interaction_radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            [movement]
            walk_speed = 5.5

            [interaction]
            block_until_mostly_open = true
            "#,
        )
        .unwrap();

        assert_eq!(config.movement.walk_speed, 5.5);
        assert_eq!(config.movement.sprint_speed, MovementConfig::default().sprint_speed);
        assert!(config.interaction.block_until_mostly_open);
        assert_eq!(config.dodge, DodgeConfig::default());
        assert_eq!(config.frame_rate, 60);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config.colliders, ColliderFilter::default());
        assert!((config.frame_time() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(GameConfig::from_toml_str("[movement\nwalk_speed = ").is_err());
        assert!(GameConfig::from_toml_str("[dodge]\nspeed = \"fast\"").is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::load_from_file("/nonexistent/breach.toml").unwrap_err();
        assert!(matches!(err, crate::error::ConfigError::Io { .. }));
    }
}
