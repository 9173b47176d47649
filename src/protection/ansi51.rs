use crate::numeric::{SQRT_3, round2};
use crate::protection::AnsiFunction;

/// Power factor assumed for the supplied demand when none is given.
pub const DEFAULT_POWER_FACTOR: f64 = 0.92;

/// Settings basis for time-delayed phase overcurrent protection (ANSI 51).
///
/// # Examples
///
/// ```
/// use grid_shield::protection::TimeOvercurrent;
///
/// let ansi51 = TimeOvercurrent::new(500.0, 13.8);
/// assert_eq!(ansi51.nominal_current(), 22.74);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeOvercurrent {
    /// Active power demand (kW).
    pub demand_kw: f64,
    /// Supply voltage (kV).
    pub voltage_kv: f64,
    /// Power factor of the demand.
    pub power_factor: f64,
}

impl TimeOvercurrent {
    /// Creates ANSI 51 settings with the default power factor.
    pub fn new(demand_kw: f64, voltage_kv: f64) -> Self {
        Self::with_power_factor(demand_kw, voltage_kv, DEFAULT_POWER_FACTOR)
    }

    pub fn with_power_factor(demand_kw: f64, voltage_kv: f64, power_factor: f64) -> Self {
        Self {
            demand_kw,
            voltage_kv,
            power_factor,
        }
    }

    /// Three-phase nominal current of the demand (A), rounded to two decimals.
    pub fn nominal_current(&self) -> f64 {
        round2(self.demand_kw / (SQRT_3 * self.voltage_kv * self.power_factor))
    }

    pub fn function(&self) -> AnsiFunction {
        AnsiFunction::PhaseTimeDelayed
    }
}
