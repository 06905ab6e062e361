//! Explorer configuration, loaded from TOML.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```toml
//! group = "F4"
//! wick_rotation = 0.5
//! auto_rotate = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, LatticeResult};
use crate::groups::LieGroupType;
use crate::projection::ProjectionParams;

/// Starting state of an explorer session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub group: LieGroupType,
    /// Initial planar rotation (radians).
    pub angle: f64,
    /// Radians added per animation frame while auto-rotating.
    pub rotation_speed: f64,
    pub auto_rotate: bool,
    /// Basis interpolation progress in [0, 1].
    pub progress: f64,
    pub wick_rotation: f64,
    /// Normalised cosmic temperature in [0, 1].
    pub temperature: f64,
    pub renormalization_scale: f64,
    pub bulk_curvature: f64,
    /// Seed for basis randomisation; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            group: LieGroupType::E8,
            angle: 0.0,
            rotation_speed: 0.0003,
            auto_rotate: false,
            progress: 1.0,
            wick_rotation: 0.0,
            temperature: 0.0,
            renormalization_scale: 0.4,
            bulk_curvature: 0.8,
            seed: None,
        }
    }
}

impl ExplorerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> LatticeResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| LatticeError::Config {
            message: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        let config: Self = toml::from_str(&contents).map_err(|e| LatticeError::Config {
            message: format!("failed to parse TOML in '{}': {}", path.display(), e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(toml: &str) -> LatticeResult<Self> {
        let config: Self = toml::from_str(toml).map_err(|e| LatticeError::Config {
            message: format!("failed to parse TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> LatticeResult<String> {
        toml::to_string_pretty(self).map_err(|e| LatticeError::Config {
            message: format!("failed to serialize config: {}", e),
        })
    }

    /// Reject non-finite values and out-of-range sliders.
    pub fn validate(&self) -> LatticeResult<()> {
        let scalars = [
            ("angle", self.angle),
            ("rotation_speed", self.rotation_speed),
            ("progress", self.progress),
            ("wick_rotation", self.wick_rotation),
            ("temperature", self.temperature),
            ("renormalization_scale", self.renormalization_scale),
            ("bulk_curvature", self.bulk_curvature),
        ];
        if let Some((name, v)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(LatticeError::Config {
                message: format!("{} must be finite, got {}", name, v),
            });
        }

        let unit = [
            ("progress", self.progress),
            ("temperature", self.temperature),
            ("renormalization_scale", self.renormalization_scale),
        ];
        if let Some((name, v)) = unit.iter().find(|(_, v)| !(0.0..=1.0).contains(v)) {
            return Err(LatticeError::Config {
                message: format!("{} must be in [0, 1], got {}", name, v),
            });
        }
        Ok(())
    }

    /// Projection parameters at universe time zero.
    pub fn projection_params(&self) -> ProjectionParams {
        ProjectionParams {
            angle: self.angle,
            progress: self.progress,
            wick_rotation: self.wick_rotation,
            universe_time: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = ExplorerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.projection_params(), ProjectionParams::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ExplorerConfig::from_toml_str(
            r#"
            group = "F4"
            wick_rotation = 0.5
            seed = 11
            "#,
        )
        .unwrap();
        assert_eq!(config.group, LieGroupType::F4);
        assert_eq!(config.wick_rotation, 0.5);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.rotation_speed, 0.0003);
        assert!(!config.auto_rotate);
    }

    #[test]
    fn toml_roundtrip() {
        let original = ExplorerConfig {
            group: LieGroupType::E6,
            temperature: 0.75,
            seed: Some(3),
            ..Default::default()
        };
        let text = original.to_toml_string().unwrap();
        assert_eq!(ExplorerConfig::from_toml_str(&text).unwrap(), original);
    }

    #[test]
    fn out_of_range_progress_rejected() {
        let err = ExplorerConfig::from_toml_str("progress = 1.5").unwrap_err();
        assert!(err.to_string().contains("progress"));
    }

    #[test]
    fn group_names_are_case_insensitive() {
        let config = ExplorerConfig::from_toml_str("group = \"e8\"").unwrap();
        assert_eq!(config.group, LieGroupType::E8);
        let config = ExplorerConfig::from_toml_str("group = \" f4 \"").unwrap();
        assert_eq!(config.group, LieGroupType::F4);
    }

    #[test]
    fn unknown_group_is_parse_error() {
        assert!(matches!(
            ExplorerConfig::from_toml_str("group = \"A5\""),
            Err(LatticeError::Config { .. })
        ));
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "group = \"G2\"\nauto_rotate = true").unwrap();
        let config = ExplorerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.group, LieGroupType::G2);
        assert!(config.auto_rotate);

        assert!(ExplorerConfig::from_file("/nonexistent/lattice.toml").is_err());
    }
}
