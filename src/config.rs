//! Site configuration, read from the inline `site-config` JSON block in `index.html`.

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    pub default_scale: f64,
    /// Scale change per unit of wheel `deltaY` (sign is inverted: wheel up zooms in).
    pub wheel_sensitivity: f64,
    /// CSS transition used while not dragging.
    pub transition: String,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 8.0,
            default_scale: 2.5,
            wheel_sensitivity: 0.002,
            transition: "transform 0.1s".to_string(),
        }
    }
}

impl ViewportConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_scale > 0.0) {
            return Err(ConfigError::NonPositiveMinScale(self.min_scale));
        }
        if !(self.min_scale <= self.max_scale) {
            return Err(ConfigError::InvertedScaleBounds {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if !(self.min_scale..=self.max_scale).contains(&self.default_scale) {
            return Err(ConfigError::DefaultOutOfBounds {
                default: self.default_scale,
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if !self.wheel_sensitivity.is_finite() || self.wheel_sensitivity <= 0.0 {
            return Err(ConfigError::BadWheelSensitivity(self.wheel_sensitivity));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Above this scroll offset, scrolling down hides the navigation bar.
    pub reveal_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 100.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub viewport: ViewportConfig,
    pub nav: NavConfig,
    pub log_level: LevelFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            nav: NavConfig::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.viewport.validate()?;
        Ok(config)
    }

    /// Reads the config block from the page. Falls back to defaults when the
    /// block is missing or invalid; the returned message says why.
    pub fn load() -> (Self, Option<String>) {
        let raw = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(format!("{err}; using defaults"))),
            },
            _ => (Self::default(), None),
        }
    }
}
