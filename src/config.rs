//! Configuration types and defaults for the query facade

use serde::{Deserialize, Serialize};

use crate::density::JitterConfig;
use crate::error::CoreError;

// =============================================================================
// Main Configuration
// =============================================================================

/// Defaults applied by `QueryFacade` when the caller does not override them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Heat cloud parameters. Default: 5 points, 0.01 deg spread
    #[serde(default)]
    pub jitter: JitterConfig,
    /// Map radius in km when the map is not in show-all mode. Default: 5.0
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,
    /// Show every located record regardless of distance. Default: true
    #[serde(default = "default_show_all")]
    pub show_all: bool,
}

fn default_radius_km() -> f64 {
    5.0
}

fn default_show_all() -> bool {
    true
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            jitter: JitterConfig::default(),
            default_radius_km: default_radius_km(),
            show_all: default_show_all(),
        }
    }
}

impl CoreConfig {
    /// Show-all map (the map screen's initial state)
    pub fn show_all() -> Self {
        Self::default()
    }

    /// Radius-limited map around the user
    pub fn nearby(radius_km: f64) -> Self {
        Self {
            default_radius_km: radius_km,
            show_all: false,
            ..Self::default()
        }
    }

    /// Heavier cloud for sparse data sets
    pub fn dense_heat() -> Self {
        Self {
            jitter: JitterConfig::new(12, 0.02),
            ..Self::default()
        }
    }

    pub fn with_jitter(mut self, jitter: JitterConfig) -> Self {
        self.jitter = jitter;
        self
    }

    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: CoreConfig =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        self.jitter.validate()?;
        if self.default_radius_km.is_nan() || self.default_radius_km < 0.0 {
            return Err(CoreError::InvalidRadius(self.default_radius_km));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CoreConfig::default();
        assert!(config.show_all);
        assert_eq!(config.default_radius_km, 5.0);
        assert_eq!(config.jitter, JitterConfig::new(5, 0.01));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        let nearby = CoreConfig::nearby(2.5);
        assert!(!nearby.show_all);
        assert_eq!(nearby.default_radius_km, 2.5);

        assert_eq!(CoreConfig::dense_heat().jitter.count, 12);
    }

    #[test]
    fn test_from_json_partial() {
        let config = CoreConfig::from_json(r#"{ "show_all": false }"#).unwrap();
        assert!(!config.show_all);
        assert_eq!(config.default_radius_km, 5.0);
        assert_eq!(config.jitter, JitterConfig::default());
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert_eq!(
            CoreConfig::from_json(r#"{ "default_radius_km": -1.0 }"#),
            Err(CoreError::InvalidRadius(-1.0))
        );
        assert!(matches!(
            CoreConfig::from_json(r#"{ "jitter": { "count": 3, "spread_deg": -0.5 } }"#),
            Err(CoreError::InvalidJitterSpread(_))
        ));
        assert!(matches!(
            CoreConfig::from_json("not json"),
            Err(CoreError::InvalidConfig(_))
        ));
    }
}
