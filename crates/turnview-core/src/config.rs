//! Viewer configuration.
//!
//! All fields have defaults matching the stock widget behavior, so
//! `ViewerConfig::default()` is what most callers want. The struct is
//! serde-compatible so it can be handed over from JavaScript as a plain object.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Filename used for the synthetic download when none is configured.
pub const DEFAULT_EXPORT_FILENAME: &str = "image.png";

/// How the source image is offset vertically before a rotated draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Centering {
    /// Offset by half the width horizontally and half the height vertically,
    /// which places the image center exactly on the rotation pivot.
    #[default]
    Centered,
    /// Offset by half the width on both axes. Only centered for square
    /// sources; non-square sources land off-center.
    WidthBased,
}

/// Which rectangle is cleared before a rotated redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearRegion {
    /// Clear the whole resized surface.
    #[default]
    FullSurface,
    /// Clear only the top-left rectangle matching the source dimensions.
    SourceBounds,
}

/// A config value the viewer cannot honor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Rotation must stay on quarter turns.
    #[error("rotation_step must be a non-zero multiple of 90, got {0}")]
    InvalidRotationStep(i64),

    /// A zero step would make clicks do nothing.
    #[error("zoom_step must be at least 1")]
    ZeroZoomStep,

    #[error("export_filename must not be empty")]
    EmptyExportFilename,
}

/// Tunables for an [`ImageViewer`](crate::viewer::ImageViewer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Zoom factor added on every primary click.
    pub zoom_step: u32,
    /// Degrees added or removed per rotation click.
    pub rotation_step: i64,
    /// Filename offered to the download handler on save.
    pub export_filename: String,
    /// Vertical centering policy for rotated draws.
    pub centering: Centering,
    /// Clear policy for rotated draws.
    pub clear_region: ClearRegion,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_step: 2,
            rotation_step: 90,
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
            centering: Centering::default(),
            clear_region: ClearRegion::default(),
        }
    }
}

impl ViewerConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Check that the values keep the viewer's invariants.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rotation_step == 0 || self.rotation_step % 90 != 0 {
            return Err(ConfigError::InvalidRotationStep(self.rotation_step));
        }
        if self.zoom_step == 0 {
            return Err(ConfigError::ZeroZoomStep);
        }
        if self.export_filename.is_empty() {
            return Err(ConfigError::EmptyExportFilename);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::new();
        assert_eq!(config.zoom_step, 2);
        assert_eq!(config.rotation_step, 90);
        assert_eq!(config.export_filename, "image.png");
        assert_eq!(config.centering, Centering::Centered);
        assert_eq!(config.clear_region, ClearRegion::FullSurface);
        assert!(config.is_default());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_accepts_quarter_turn_multiples() {
        for step in [90, -90, 180, 270, 360] {
            let config = ViewerConfig {
                rotation_step: step,
                ..ViewerConfig::default()
            };
            assert_eq!(config.validate(), Ok(()), "step {step}");
        }
    }

    #[test]
    fn test_validate_rejects_arbitrary_rotation_step() {
        for step in [45, 1, -30, 135] {
            let config = ViewerConfig {
                rotation_step: step,
                ..ViewerConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidRotationStep(step))
            );
        }
    }

    #[test]
    fn test_validate_rejects_zero_rotation_step() {
        let config = ViewerConfig {
            rotation_step: 0,
            ..ViewerConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidRotationStep(0)));
    }

    #[test]
    fn test_validate_rejects_zero_zoom_step() {
        let config: ViewerConfig = serde_json::from_str(r#"{"zoom_step": 0}"#).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::ZeroZoomStep));
    }

    #[test]
    fn test_validate_rejects_empty_filename() {
        let config = ViewerConfig {
            export_filename: String::new(),
            ..ViewerConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyExportFilename));
    }

    #[test]
    fn test_not_default() {
        let mut config = ViewerConfig::new();
        config.centering = Centering::WidthBased;
        assert!(!config.is_default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ViewerConfig =
            serde_json::from_str(r#"{"zoom_step": 4, "centering": "width_based"}"#).unwrap();
        assert_eq!(config.zoom_step, 4);
        assert_eq!(config.centering, Centering::WidthBased);
        assert_eq!(config.rotation_step, 90);
        assert_eq!(config.export_filename, "image.png");
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = ViewerConfig::new();
        config.clear_region = ClearRegion::SourceBounds;
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("source_bounds"));
        let back: ViewerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
