//! Viewport and seed configuration
//!
//! Loaded from JSON; every field is optional and falls back to its default.

use serde::{Deserialize, Serialize};

use crate::consts::{MAIN_AREA_HEIGHT, MAIN_AREA_WIDTH};

/// Errors from loading a config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("viewport must be positive and finite, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("could not read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Size of the drawing surface in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Distance from the left edge to the balloon's screen position
    #[inline]
    pub fn horizontal_padding(&self) -> f32 {
        (self.width - MAIN_AREA_WIDTH) / 3.0
    }

    /// Space above the main area
    #[inline]
    pub fn vertical_padding(&self) -> f32 {
        (self.height - MAIN_AREA_HEIGHT) / 2.0
    }

    /// Screen y of world y = 0
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.vertical_padding() + MAIN_AREA_HEIGHT
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub viewport: Viewport,
    /// Fixed run seed (replays the same forest); picked from the clock if absent
    pub seed: Option<u64>,
}

impl Config {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.viewport.is_valid() {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        Ok(())
    }

    /// Load a config file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.viewport, Viewport::default());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_json(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.viewport.width, 1280.0);

        let config =
            Config::from_json(r#"{ "viewport": { "width": 1920, "height": 1080 } }"#).unwrap();
        assert_eq!(config.viewport, Viewport::new(1920.0, 1080.0));
    }

    #[test]
    fn test_partial_viewport_keeps_other_default() {
        let config = Config::from_json(r#"{ "viewport": { "width": 1920 } }"#).unwrap();
        assert_eq!(config.viewport, Viewport::new(1920.0, 720.0));

        let config = Config::from_json(r#"{ "viewport": { "height": 900 } }"#).unwrap();
        assert_eq!(config.viewport, Viewport::new(1280.0, 900.0));
    }

    #[test]
    fn test_rejects_bad_viewport() {
        let err = Config::from_json(r#"{ "viewport": { "width": 0, "height": 600 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidViewport { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Config::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("invalid config JSON"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_missing_file() {
        let err = Config::load(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_layout() {
        let viewport = Viewport::new(1400.0, 800.0);
        assert_eq!(viewport.horizontal_padding(), 200.0);
        assert_eq!(viewport.vertical_padding(), 200.0);
        assert_eq!(viewport.ground_line(), 600.0);
    }
}
