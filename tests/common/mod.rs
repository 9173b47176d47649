//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use grid_shield::ProtectionError;
use grid_shield::devices::{PowerTransformer, TransformerParams};
use grid_shield::numeric::{SQRT_3, round2};

pub const RATED_POWERS: [f64; 14] = [
    30.0, 45.0, 75.0, 112.5, 150.0, 225.0, 300.0, 500.0, 750.0, 1000.0, 1500.0, 2000.0, 2500.0,
    3000.0,
];

pub const HIGH_VOLTAGES: [f64; 3] = [13.8, 22.0, 34.5];

/// Valid impedances, one per rated power and voltage pair.
pub const IMPEDANCES: [f64; 42] = [
    5.57, 5.6, 3.82, 1.03, 2.96, 5.47, 1.43, 3.09, 1.83, 1.52, 3.76, 1.63, 1.36, 6.25, 4.49, 5.57,
    6.15, 6.8, 1.87, 5.43, 2.34, 5.73, 6.65, 2.54, 5.78, 5.89, 5.52, 6.34, 2.49, 5.79, 5.5, 2.82,
    6.98, 1.94, 1.03, 2.47, 5.78, 6.66, 2.37, 4.35, 6.0, 5.93,
];

pub const IRUSH_RATIOS: [f64; 42] = [
    19.4, 8.9, 6.8, 12.7, 16.7, 5.2, 12.9, 5.4, 17.9, 17.4, 8.9, 18.1, 13.3, 14.8, 12.4, 14.2,
    7.3, 15.2, 8.5, 17.3, 14.4, 16.2, 10.7, 7.6, 17.6, 17.7, 18.1, 18.2, 15.8, 13.6, 13.8, 6.8,
    8.3, 9.5, 13.4, 19.4, 19.8, 9.8, 13.7, 7.3, 18.4, 9.7,
];

pub const IRUSH_DELAYS: [f64; 42] = [
    0.45, 0.43, 0.4, 0.99, 0.18, 1.0, 0.25, 0.43, 0.13, 0.58, 0.59, 0.52, 0.41, 0.69, 0.84, 0.21,
    0.27, 0.45, 0.35, 0.49, 0.97, 0.86, 0.61, 0.44, 0.63, 0.45, 0.42, 0.33, 0.88, 0.2, 0.9, 0.94,
    0.18, 0.33, 0.33, 0.87, 0.13, 0.93, 0.66, 0.73, 0.96, 0.62,
];

pub const WRONG_RATED_POWERS: [f64; 42] = [
    1994.5, 2358.0, 1044.5, 747.0, 2590.0, 2800.5, 1201.5, 2721.5, 2195.0, 1037.5, -2275.5,
    2322.5, -2926.0, 1988.5, 528.0, -611.0, 88.5, 214.5, 2768.0, 268.5, 445.0, 1412.5, 2352.0,
    2911.0, 2184.0, 1653.5, 1862.5, 764.0, 1566.0, 2916.5, 1030.0, 2427.0, 451.0, -1715.5,
    -2955.0, 1465.5, 693.5, 2351.5, -2477.5, 1460.5, 1613.5, 1312.5,
];

pub const WRONG_HIGH_VOLTAGES: [f64; 42] = [
    -26.0, 28.8, -13.9, 33.0, -20.1, -20.4, 27.2, 27.8, 24.9, -15.4, 30.7, -33.1, -33.6, 29.5,
    29.4, -17.3, -24.2, 32.9, 14.5, -14.2, 20.3, -25.1, 26.1, 33.9, 29.8, 17.6, 23.7, -16.2, 25.6,
    34.1, -28.6, 15.8, 20.2, 17.5, 18.1, -30.2, 14.0, 28.1, -18.8, -31.6, -23.5, 27.5,
];

pub const WRONG_IMPEDANCES: [f64; 42] = [
    7.3, 0.61, -6.17, 0.41, 0.52, 7.4, 0.8, 0.37, 0.87, -3.33, -4.14, 0.74, 0.67, -3.88, -3.21,
    0.3, 0.44, -2.81, 0.74, 0.55, 11.34, 14.86, 10.76, 0.05, -2.72, -4.73, 0.44, -5.75, -1.47,
    -6.48, -1.43, 0.99, 0.08, -2.55, 0.96, -6.74, 0.72, 11.32, 7.99, 10.6, -3.19, 14.06,
];

pub const WRONG_IRUSH_RATIOS: [f64; 42] = [
    29.0, 2.7, 4.9, -17.6, 36.4, 0.9, -1.3, 3.7, -16.7, -4.6, 29.5, 20.9, 3.2, -2.9, -0.7, -1.1,
    39.6, 22.8, 37.4, -10.3, 2.5, 31.7, 3.4, -7.5, -3.6, -17.7, -4.9, 23.2, -14.9, 0.7, 29.4,
    32.9, -3.3, 36.2, -1.1, 2.2, 20.6, 2.5, -14.1, 2.9, -19.5, 3.3,
];

pub const WRONG_IRUSH_DELAYS: [f64; 42] = [
    -4.74, -3.18, 2.02, -4.59, 3.8, 4.74, 3.03, 3.69, -4.82, 2.1, 4.14, 1.5, -1.3, 1.65, -1.98,
    -2.04, -3.84, -2.23, -4.24, -2.31, 2.23, 3.63, 4.53, -0.31, -3.68, -2.37, 1.58, -2.71, 2.04,
    4.61, 3.46, -3.71, -2.5, 3.19, 1.08, -0.76, 1.31, -4.23, 1.68, 3.34, 1.61, -1.76,
];

/// A fully specified, valid transformer case.
#[derive(Debug, Clone, Copy)]
pub struct Case {
    pub rated_power: f64,
    pub high_voltage_level: f64,
    pub impedance: f64,
    pub irush_ratio: f64,
    pub irush_delay: f64,
}

/// Every catalog rated power paired with every voltage, each with its own
/// impedance and inrush values.
pub fn catalog_cases() -> Vec<Case> {
    RATED_POWERS
        .iter()
        .flat_map(|&rated_power| HIGH_VOLTAGES.iter().map(move |&kv| (rated_power, kv)))
        .enumerate()
        .map(|(i, (rated_power, high_voltage_level))| Case {
            rated_power,
            high_voltage_level,
            impedance: IMPEDANCES[i],
            irush_ratio: IRUSH_RATIOS[i],
            irush_delay: IRUSH_DELAYS[i],
        })
        .collect()
}

/// Builds a transformer from positional arguments, like the constructor
/// call `PowerTransformer(ratedPower, highVoltageLevel, ...)`.
pub fn build(args: &[f64]) -> Result<PowerTransformer, ProtectionError> {
    PowerTransformer::try_from_params(&TransformerParams::from_positional(args))
}

/// Expected `(nominal, ansi, ansi_earth_fault)` currents, each step
/// rounded before feeding the next.
pub fn expected_currents(
    rated_power: f64,
    high_voltage_level: f64,
    impedance: f64,
) -> (f64, f64, f64) {
    let nominal = round2(rated_power / (high_voltage_level * SQRT_3));
    let ansi = round2(nominal * (100.0 / impedance));
    let earth_fault = round2(ansi * 0.58);
    (nominal, ansi, earth_fault)
}
