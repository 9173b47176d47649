//! Construction-time validation of transformer ratings.
//!
//! Checks run in a fixed order and stop at the first failure:
//! presence of the two required ratings, catalog membership of both,
//! then the impedance, inrush ratio and inrush delay ranges.

use std::ops::RangeInclusive;

use crate::devices::catalog::Catalog;
use crate::error::ProtectionError;
use crate::numeric::within;

/// Permitted short-circuit impedance (%).
pub const IMPEDANCE_RANGE: RangeInclusive<f64> = 1.0..=7.0;
/// Permitted inrush current multiple of nominal current.
pub const IRUSH_RATIO_RANGE: RangeInclusive<f64> = 5.0..=20.0;
/// Permitted inrush duration (s).
pub const IRUSH_DELAY_RANGE: RangeInclusive<f64> = 0.1..=1.0;

/// Raw, unvalidated transformer construction parameters.
///
/// Fields left as `None` are either required (`rated_power`,
/// `high_voltage_level`) or take the validator's defaults.
///
/// # Examples
///
/// ```
/// use grid_shield::devices::TransformerParams;
///
/// let params = TransformerParams::new()
///     .rated_power(150.0)
///     .high_voltage_level(13.8)
///     .impedance(4.5);
/// assert_eq!(params.impedance, Some(4.5));
/// assert_eq!(params.irush_ratio, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransformerParams {
    /// Apparent power rating (kVA).
    pub rated_power: Option<f64>,
    /// Primary-side voltage (kV).
    pub high_voltage_level: Option<f64>,
    /// Short-circuit impedance (%).
    pub impedance: Option<f64>,
    /// Inrush current as a multiple of nominal current.
    pub irush_ratio: Option<f64>,
    /// Inrush duration (s).
    pub irush_delay: Option<f64>,
}

impl TransformerParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds parameters from positional arguments in constructor order:
    /// rated power, high voltage level, impedance, irush ratio, irush delay.
    ///
    /// Arguments beyond the fifth are ignored.
    pub fn from_positional(args: &[f64]) -> Self {
        let arg = |i: usize| args.get(i).copied();
        Self {
            rated_power: arg(0),
            high_voltage_level: arg(1),
            impedance: arg(2),
            irush_ratio: arg(3),
            irush_delay: arg(4),
        }
    }

    pub fn rated_power(mut self, kva: f64) -> Self {
        self.rated_power = Some(kva);
        self
    }

    pub fn high_voltage_level(mut self, kv: f64) -> Self {
        self.high_voltage_level = Some(kv);
        self
    }

    pub fn impedance(mut self, percent: f64) -> Self {
        self.impedance = Some(percent);
        self
    }

    pub fn irush_ratio(mut self, ratio: f64) -> Self {
        self.irush_ratio = Some(ratio);
        self
    }

    pub fn irush_delay(mut self, seconds: f64) -> Self {
        self.irush_delay = Some(seconds);
        self
    }
}

/// Values used for optional parameters the caller leaves unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Defaults {
    pub impedance: f64,
    pub irush_ratio: f64,
    pub irush_delay: f64,
}

impl Defaults {
    pub const STANDARD: Defaults = Defaults {
        impedance: 5.0,
        irush_ratio: 8.0,
        irush_delay: 0.1,
    };
}

impl Default for Defaults {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Transformer inputs that passed validation.
///
/// Only [`Validator::validate`] can produce a value of this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratings {
    pub(crate) rated_power: f64,
    pub(crate) high_voltage_level: f64,
    pub(crate) impedance: f64,
    pub(crate) irush_ratio: f64,
    pub(crate) irush_delay: f64,
}

/// Gatekeeper for transformer construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Validator {
    catalog: Catalog,
    defaults: Defaults,
}

impl Validator {
    /// Standard catalog with the standard defaults.
    pub const STANDARD: Validator = Validator {
        catalog: Catalog::STANDARD,
        defaults: Defaults::STANDARD,
    };

    pub fn new(catalog: Catalog, defaults: Defaults) -> Self {
        Self { catalog, defaults }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Validates raw parameters, reporting the first failing check.
    ///
    /// # Errors
    ///
    /// * [`ProtectionError::MissingParameter`] when a required rating is
    ///   absent, zero or NaN.
    /// * [`ProtectionError::IllegalArgument`] when a rating is outside its
    ///   catalog or a value is outside its closed range.
    pub fn validate(&self, params: &TransformerParams) -> Result<Ratings, ProtectionError> {
        let rated_power = present(params.rated_power)
            .ok_or(ProtectionError::MissingParameter("ratedPower"))?;
        let high_voltage_level = present(params.high_voltage_level)
            .ok_or(ProtectionError::MissingParameter("highVoltageLevel"))?;

        if !self.catalog.accepts_rated_power(rated_power) {
            return Err(ProtectionError::IllegalArgument("ratedPower"));
        }
        if !self.catalog.accepts_high_voltage(high_voltage_level) {
            return Err(ProtectionError::IllegalArgument("highVoltageLevel"));
        }

        let impedance = params.impedance.unwrap_or(self.defaults.impedance);
        check_range(impedance, &IMPEDANCE_RANGE, "impedance")?;

        let irush_ratio = params.irush_ratio.unwrap_or(self.defaults.irush_ratio);
        check_range(irush_ratio, &IRUSH_RATIO_RANGE, "irushRatio")?;

        let irush_delay = params.irush_delay.unwrap_or(self.defaults.irush_delay);
        check_range(irush_delay, &IRUSH_DELAY_RANGE, "irushDelay")?;

        Ok(Ratings {
            rated_power,
            high_voltage_level,
            impedance,
            irush_ratio,
            irush_delay,
        })
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Zero and NaN count as not supplied.
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

fn check_range(
    value: f64,
    range: &RangeInclusive<f64>,
    parameter: &'static str,
) -> Result<(), ProtectionError> {
    if within(value, *range.start(), *range.end()) {
        Ok(())
    } else {
        Err(ProtectionError::IllegalArgument(parameter))
    }
}
