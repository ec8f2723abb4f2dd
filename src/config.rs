//! Visual constants for the surface, overridable from localStorage.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, SurfaceError};
use crate::model::StrokeStyle;

/// localStorage key holding a JSON object with any subset of the fields below.
pub const STORAGE_KEY: &str = "ds_surface_config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub stroke_color: String,
    pub stroke_width: f64,
    /// Canvas background behind the strokes.
    pub background: String,
    /// Pixels per displayed unit.
    pub distance_divisor: f64,
    pub unit_suffix: String,
    /// How far above the pen the label sits, in pixels.
    pub label_offset_y: f64,
    pub label_color: String,
    pub label_font_family: String,
    pub label_font_size: String,
    pub label_letter_spacing: String,
    pub label_fade_ms: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            stroke_color: "#e9fe00".to_string(),
            stroke_width: 4.0,
            background: "#9aa0a9".to_string(),
            distance_divisor: 5.0,
            unit_suffix: "m".to_string(),
            label_offset_y: 30.0,
            label_color: "#e9fe00".to_string(),
            label_font_family: "'DotGothic16', sans-serif".to_string(),
            label_font_size: "0.75rem".to_string(),
            label_letter_spacing: "0.2em".to_string(),
            label_fade_ms: 300,
        }
    }
}

impl SurfaceConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SurfaceConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(SurfaceError::InvalidConfig(format!(
                "stroke_width must be positive, got {}",
                self.stroke_width
            )));
        }
        if !self.distance_divisor.is_finite() || self.distance_divisor <= 0.0 {
            return Err(SurfaceError::InvalidConfig(format!(
                "distance_divisor must be positive, got {}",
                self.distance_divisor
            )));
        }
        Ok(())
    }

    /// Reads the stored override, falling back to defaults when it is absent
    /// or unusable.
    pub fn load() -> Self {
        match Self::load_stored() {
            Ok(Some(config)) => {
                debug!("using stored surface config");
                config
            }
            Ok(None) => Self::default(),
            Err(error) => {
                warn!(%error, "ignoring stored surface config");
                Self::default()
            }
        }
    }

    fn load_stored() -> Result<Option<Self>> {
        let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
        let Some(store) = window.local_storage()? else {
            return Ok(None);
        };
        match store.get_item(STORAGE_KEY)? {
            Some(raw) => Self::from_json(&raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.stroke_color.clone(),
            width: self.stroke_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_look() {
        let config = SurfaceConfig::default();
        assert_eq!(config.stroke_color, "#e9fe00");
        assert_eq!(config.stroke_width, 4.0);
        assert_eq!(config.distance_divisor, 5.0);
        assert_eq!(config.unit_suffix, "m");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = SurfaceConfig::from_json(r##"{"stroke_color":"#ff0000","unit_suffix":"ft"}"##)
            .expect("valid config");
        assert_eq!(config.stroke_color, "#ff0000");
        assert_eq!(config.unit_suffix, "ft");
        assert_eq!(config.stroke_width, 4.0);
        assert_eq!(config.label_fade_ms, 300);
    }

    #[test]
    fn rejects_non_positive_divisor() {
        let err = SurfaceConfig::from_json(r#"{"distance_divisor":0}"#).unwrap_err();
        assert!(matches!(err, SurfaceError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_negative_width() {
        let err = SurfaceConfig::from_json(r#"{"stroke_width":-1.5}"#).unwrap_err();
        assert!(matches!(err, SurfaceError::InvalidConfig(_)));
    }

    #[test]
    fn reports_malformed_json() {
        let err = SurfaceConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, SurfaceError::ConfigParse(_)));
    }

    #[test]
    fn stroke_style_uses_configured_pen() {
        let config = SurfaceConfig {
            stroke_width: 7.0,
            ..Default::default()
        };
        assert_eq!(
            config.stroke_style(),
            StrokeStyle {
                color: "#e9fe00".to_string(),
                width: 7.0
            }
        );
    }
}
