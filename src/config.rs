//! TOML-based protection configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::devices::catalog::{Catalog, STANDARD_HIGH_VOLTAGES_KV, STANDARD_RATED_POWERS_KVA};
use crate::devices::validator::{
    Defaults, IMPEDANCE_RANGE, IRUSH_DELAY_RANGE, IRUSH_RATIO_RANGE, Validator,
};
use crate::protection::ansi51::DEFAULT_POWER_FACTOR;

/// Top-level protection configuration parsed from TOML.
///
/// All sections have defaults matching the standard catalog. Load from
/// TOML with [`ProtectionConfig::from_toml_file`] or use
/// [`ProtectionConfig::standard`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProtectionConfig {
    /// Permitted transformer ratings.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Values for optional transformer parameters.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// ANSI 51 calculation parameters.
    #[serde(default)]
    pub ansi51: Ansi51Config,
}

/// Permitted transformer ratings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Standard rated powers (kVA).
    pub rated_power_options: Vec<f64>,
    /// Standard primary voltages (kV).
    pub high_voltage_options: Vec<f64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            rated_power_options: STANDARD_RATED_POWERS_KVA.to_vec(),
            high_voltage_options: STANDARD_HIGH_VOLTAGES_KV.to_vec(),
        }
    }
}

/// Values used when a transformer's optional parameters are left unset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Short-circuit impedance (%).
    pub impedance: f64,
    /// Inrush current multiple of nominal current.
    pub irush_ratio: f64,
    /// Inrush duration (s).
    pub irush_delay: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let d = Defaults::STANDARD;
        Self {
            impedance: d.impedance,
            irush_ratio: d.irush_ratio,
            irush_delay: d.irush_delay,
        }
    }
}

/// ANSI 51 calculation parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Ansi51Config {
    /// Power factor of the supplied demand (0.0–1.0].
    pub power_factor: f64,
}

impl Default for Ansi51Config {
    fn default() -> Self {
        Self {
            power_factor: DEFAULT_POWER_FACTOR,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"catalog.rated_power_options"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl ProtectionConfig {
    /// Returns the standard configuration (built-in catalogs and defaults).
    pub fn standard() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            defaults: DefaultsConfig::default(),
            ansi51: Ansi51Config::default(),
        }
    }

    /// Returns the compact-substation preset: pole- and pad-mounted sizes
    /// up to 300 kVA on 13.8 kV and 22 kV networks.
    pub fn compact() -> Self {
        Self {
            catalog: CatalogConfig {
                rated_power_options: vec![30.0, 45.0, 75.0, 112.5, 150.0, 225.0, 300.0],
                high_voltage_options: vec![13.8, 22.0],
            },
            ..Self::standard()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["standard", "compact"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "standard" => Ok(Self::standard()),
            "compact" => Ok(Self::compact()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Builds the validator described by this configuration.
    pub fn validator(&self) -> Validator {
        Validator::new(
            Catalog::new(
                self.catalog.rated_power_options.clone(),
                self.catalog.high_voltage_options.clone(),
            ),
            Defaults {
                impedance: self.defaults.impedance,
                irush_ratio: self.defaults.irush_ratio,
                irush_delay: self.defaults.irush_delay,
            },
        )
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let cat = &self.catalog;
        check_options(
            &cat.rated_power_options,
            "catalog.rated_power_options",
            &mut errors,
        );
        check_options(
            &cat.high_voltage_options,
            "catalog.high_voltage_options",
            &mut errors,
        );

        let d = &self.defaults;
        let ranges = [
            ("defaults.impedance", d.impedance, &IMPEDANCE_RANGE),
            ("defaults.irush_ratio", d.irush_ratio, &IRUSH_RATIO_RANGE),
            ("defaults.irush_delay", d.irush_delay, &IRUSH_DELAY_RANGE),
        ];
        for (field, value, range) in ranges {
            if !range.contains(&value) {
                errors.push(ConfigError {
                    field: field.into(),
                    message: format!("must be in [{}, {}]", range.start(), range.end()),
                });
            }
        }

        let pf = self.ansi51.power_factor;
        if !(pf > 0.0 && pf <= 1.0) {
            errors.push(ConfigError {
                field: "ansi51.power_factor".into(),
                message: "must be in (0.0, 1.0]".into(),
            });
        }

        errors
    }
}

fn check_options(options: &[f64], field: &str, errors: &mut Vec<ConfigError>) {
    if options.is_empty() {
        errors.push(ConfigError {
            field: field.into(),
            message: "must not be empty".into(),
        });
        return;
    }
    if options.iter().any(|v| !v.is_finite() || *v <= 0.0) {
        errors.push(ConfigError {
            field: field.into(),
            message: "entries must be finite and > 0".into(),
        });
    }
    let has_duplicates = options
        .iter()
        .enumerate()
        .any(|(i, v)| options[..i].contains(v));
    if has_duplicates {
        errors.push(ConfigError {
            field: field.into(),
            message: "entries must be unique".into(),
        });
    }
}
