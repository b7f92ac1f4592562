use thiserror::Error;

/// Failures while reaching browser globals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("min_scale must be positive, got {0}")]
    NonPositiveMinScale(f64),
    #[error("min_scale {min} exceeds max_scale {max}")]
    InvertedScaleBounds { min: f64, max: f64 },
    #[error("default_scale {default} outside [{min}, {max}]")]
    DefaultOutOfBounds { default: f64, min: f64, max: f64 },
    #[error("wheel_sensitivity must be finite and positive, got {0}")]
    BadWheelSensitivity(f64),
}
