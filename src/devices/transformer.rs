use serde::Serialize;
use tracing::{debug, warn};

use crate::devices::property::{Property, SealedEntity};
use crate::devices::validator::{Ratings, TransformerParams, Validator};
use crate::error::ProtectionError;
use crate::numeric::{SQRT_3, round2};

/// Fraction of the ANSI current used as the earth-fault point.
pub const EARTH_FAULT_FACTOR: f64 = 0.58;

/// A three-phase power transformer with validated ratings.
///
/// `PowerTransformer` can only be built through validation and has no
/// setters: its inputs and the protection currents derived from them are
/// fixed for the lifetime of the value. Derived quantities are computed
/// once, at construction, each rounded to two decimals from the previous
/// rounded value:
///
/// - nominal current: `In = S / (V * √3)`
/// - ANSI current: `In * 100 / Z%`
/// - ANSI earth-fault current: `I_ansi * 0.58`
/// - inrush current: `In * irush_ratio`
///
/// # Examples
///
/// ```
/// use grid_shield::devices::PowerTransformer;
///
/// let tr = PowerTransformer::new(150.0, 13.8).unwrap();
/// assert_eq!(tr.nominal_current(), 6.28);
/// assert_eq!(tr.ansi_current(), 125.6);
/// assert_eq!(tr.ansi_earth_fault_current(), 72.85);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerTransformer {
    rated_power: f64,
    high_voltage_level: f64,
    impedance: f64,
    irush_ratio: f64,
    irush_delay: f64,
    nominal_current: f64,
    ansi_current: f64,
    ansi_earth_fault_current: f64,
    #[serde(rename = "rushCurrent")]
    inrush_current: f64,
    ansi_delay: f64,
}

impl PowerTransformer {
    /// Creates a transformer with default impedance, inrush ratio and
    /// inrush delay, checked against the standard catalog.
    ///
    /// # Errors
    ///
    /// See [`Validator::validate`].
    pub fn new(rated_power: f64, high_voltage_level: f64) -> Result<Self, ProtectionError> {
        Self::try_from_params(
            &TransformerParams::new()
                .rated_power(rated_power)
                .high_voltage_level(high_voltage_level),
        )
    }

    /// Creates a transformer from raw parameters using the standard catalog.
    ///
    /// # Errors
    ///
    /// See [`Validator::validate`].
    pub fn try_from_params(params: &TransformerParams) -> Result<Self, ProtectionError> {
        Self::with_validator(params, &Validator::STANDARD)
    }

    /// Creates a transformer from raw parameters using `validator`'s
    /// catalog and defaults.
    ///
    /// # Errors
    ///
    /// See [`Validator::validate`].
    pub fn with_validator(
        params: &TransformerParams,
        validator: &Validator,
    ) -> Result<Self, ProtectionError> {
        match validator.validate(params) {
            Ok(ratings) => {
                let transformer = Self::from_ratings(ratings);
                debug!(
                    rated_power = transformer.rated_power,
                    high_voltage_level = transformer.high_voltage_level,
                    nominal_current = transformer.nominal_current,
                    ansi_current = transformer.ansi_current,
                    ansi_earth_fault_current = transformer.ansi_earth_fault_current,
                    "transformer created"
                );
                Ok(transformer)
            }
            Err(err) => {
                warn!(parameter = err.parameter(), error = %err, "transformer rejected");
                Err(err)
            }
        }
    }

    fn from_ratings(ratings: Ratings) -> Self {
        let nominal_current =
            round2(ratings.rated_power / (ratings.high_voltage_level * SQRT_3));
        let ansi_current = round2(nominal_current * (100.0 / ratings.impedance));
        let ansi_earth_fault_current = round2(ansi_current * EARTH_FAULT_FACTOR);
        let inrush_current = round2(nominal_current * ratings.irush_ratio);

        Self {
            rated_power: ratings.rated_power,
            high_voltage_level: ratings.high_voltage_level,
            impedance: ratings.impedance,
            irush_ratio: ratings.irush_ratio,
            irush_delay: ratings.irush_delay,
            nominal_current,
            ansi_current,
            ansi_earth_fault_current,
            inrush_current,
            ansi_delay: ansi_delay_for(ratings.impedance),
        }
    }

    /// Apparent power rating (kVA).
    pub fn rated_power(&self) -> f64 {
        self.rated_power
    }

    /// Primary-side voltage (kV).
    pub fn high_voltage_level(&self) -> f64 {
        self.high_voltage_level
    }

    /// Short-circuit impedance (%).
    pub fn impedance(&self) -> f64 {
        self.impedance
    }

    /// Inrush current as a multiple of nominal current.
    pub fn irush_ratio(&self) -> f64 {
        self.irush_ratio
    }

    /// Inrush duration (s).
    pub fn irush_delay(&self) -> f64 {
        self.irush_delay
    }

    /// Primary nominal current (A).
    pub fn nominal_current(&self) -> f64 {
        self.nominal_current
    }

    /// ANSI point current (A), the symmetrical fault current the
    /// transformer withstands for [`Self::ansi_delay`] seconds.
    pub fn ansi_current(&self) -> f64 {
        self.ansi_current
    }

    /// ANSI point current for phase-to-earth faults (A).
    pub fn ansi_earth_fault_current(&self) -> f64 {
        self.ansi_earth_fault_current
    }

    /// Magnetizing inrush current at energization (A).
    pub fn inrush_current(&self) -> f64 {
        self.inrush_current
    }

    /// Withstand time of the ANSI point (s).
    pub fn ansi_delay(&self) -> f64 {
        self.ansi_delay
    }
}

impl TryFrom<TransformerParams> for PowerTransformer {
    type Error = ProtectionError;

    fn try_from(params: TransformerParams) -> Result<Self, Self::Error> {
        Self::try_from_params(&params)
    }
}

impl SealedEntity for PowerTransformer {
    fn property(&self, property: Property) -> f64 {
        match property {
            Property::RatedPower => self.rated_power,
            Property::HighVoltageLevel => self.high_voltage_level,
            Property::Impedance => self.impedance,
            Property::IrushRatio => self.irush_ratio,
            Property::IrushDelay => self.irush_delay,
            Property::NominalCurrent => self.nominal_current,
            Property::AnsiCurrent => self.ansi_current,
            Property::AnsiEarthFaultCurrent => self.ansi_earth_fault_current,
            Property::InrushCurrent => self.inrush_current,
            Property::AnsiDelay => self.ansi_delay,
        }
    }
}

/// ANSI withstand time by impedance, rounded up to the next tabulated row.
fn ansi_delay_for(impedance: f64) -> f64 {
    const TABLE: [(f64, f64); 3] = [(4.0, 2.0), (5.0, 3.0), (6.0, 4.0)];
    TABLE
        .iter()
        .find(|(max_impedance, _)| impedance <= *max_impedance)
        .map_or(5.0, |&(_, seconds)| seconds)
}
