use std::path::Path;

use debugdraw_common::{
    Color, LINES_LINGER_FRAMES, TEXT_BG_COLOR, TEXT_COLOR, TEXT_LINGER_FRAMES,
};
use debugdraw_input::TOGGLE_ACTION;
use debugdraw_render::TextOverlayStyle;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Errors from loading or validating an [`OverlayConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Overlay tuning. Every field has a default, so a config file only needs
/// the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    /// Frames a text entry stays up when the caller passes no linger.
    pub text_linger_frames: u32,
    /// Frames boxes, lines, points and rays stay up when the caller passes no linger.
    pub geometry_linger_frames: u32,
    /// Host action name that flips visibility.
    pub toggle_action: String,
    pub start_visible: bool,
    /// Park evicted box instances in the pool instead of destroying them.
    pub recycle_boxes: bool,
    /// Idle box instances destroyed per frame.
    pub box_trim_per_frame: usize,
    /// Evict every expired entry, not just the expired prefix of each queue.
    pub full_scan_eviction: bool,
    pub text_origin: [f32; 2],
    pub text_padding: [f32; 2],
    pub text_color: Color,
    pub text_background: Color,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            text_linger_frames: TEXT_LINGER_FRAMES,
            geometry_linger_frames: LINES_LINGER_FRAMES,
            toggle_action: TOGGLE_ACTION.to_owned(),
            start_visible: true,
            recycle_boxes: true,
            box_trim_per_frame: 1,
            full_scan_eviction: false,
            text_origin: [8.0, 8.0],
            text_padding: [2.0, 1.0],
            text_color: TEXT_COLOR,
            text_background: TEXT_BG_COLOR,
        }
    }
}

impl OverlayConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded overlay config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.toggle_action.trim().is_empty() {
            return Err(ConfigError::Invalid("toggle_action is empty".into()));
        }
        if !self.text_origin.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::Invalid("text_origin must be finite".into()));
        }
        if !self.text_padding.iter().all(|v| v.is_finite() && *v >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "text_padding must be finite and non-negative, got {:?}",
                self.text_padding
            )));
        }
        Ok(())
    }

    pub fn text_style(&self) -> TextOverlayStyle {
        TextOverlayStyle {
            origin: Vec2::from(self.text_origin),
            padding: Vec2::from(self.text_padding),
            text_color: self.text_color,
            background: self.text_background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_linger_constants() {
        let c = OverlayConfig::default();
        assert_eq!(c.text_linger_frames, 5);
        assert_eq!(c.geometry_linger_frames, 120);
        assert_eq!(c.toggle_action, "debug_toggle");
        assert_eq!(c.box_trim_per_frame, 1);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = OverlayConfig::from_json_str(r#"{ "text_linger_frames": 30 }"#).unwrap();
        assert_eq!(c.text_linger_frames, 30);
        assert_eq!(c.geometry_linger_frames, 120);
        assert!(c.recycle_boxes);
    }

    #[test]
    fn unknown_fields_rejected() {
        let err = OverlayConfig::from_json_str(r#"{ "text_lingr": 30 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn empty_toggle_action_rejected() {
        let err = OverlayConfig::from_json_str(r#"{ "toggle_action": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn negative_padding_rejected() {
        let c = OverlayConfig {
            text_padding: [-1.0, 0.0],
            ..OverlayConfig::default()
        };
        assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "toggle_action": "f3", "text_color": {{ "r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0 }} }}"#
        )
        .unwrap();

        let c = OverlayConfig::load(file.path()).unwrap();
        assert_eq!(c.toggle_action, "f3");
        assert_eq!(c.text_color, Color::RED);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = OverlayConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn text_style_from_config() {
        let style = OverlayConfig::default().text_style();
        assert_eq!(style, TextOverlayStyle::default());
    }
}
