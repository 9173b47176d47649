//! Protection settings tables and their CSV export.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::devices::{PowerTransformer, TransformerParams, Validator};
use crate::error::ProtectionError;

/// Column header for the settings table.
const HEADER: &str = "rated_power_kva,high_voltage_kv,impedance_pct,irush_ratio,\
                      irush_delay_s,nominal_current_a,ansi_current_a,\
                      ansi_earth_fault_current_a,inrush_current_a,ansi_delay_s";

/// One row of a protection settings table.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsRow {
    pub rated_power_kva: f64,
    pub high_voltage_kv: f64,
    pub impedance_pct: f64,
    pub irush_ratio: f64,
    pub irush_delay_s: f64,
    pub nominal_current_a: f64,
    pub ansi_current_a: f64,
    pub ansi_earth_fault_current_a: f64,
    pub inrush_current_a: f64,
    pub ansi_delay_s: f64,
}

impl From<&PowerTransformer> for SettingsRow {
    fn from(tr: &PowerTransformer) -> Self {
        Self {
            rated_power_kva: tr.rated_power(),
            high_voltage_kv: tr.high_voltage_level(),
            impedance_pct: tr.impedance(),
            irush_ratio: tr.irush_ratio(),
            irush_delay_s: tr.irush_delay(),
            nominal_current_a: tr.nominal_current(),
            ansi_current_a: tr.ansi_current(),
            ansi_earth_fault_current_a: tr.ansi_earth_fault_current(),
            inrush_current_a: tr.inrush_current(),
            ansi_delay_s: tr.ansi_delay(),
        }
    }
}

/// Builds one settings row per catalog rated power and voltage, using the
/// validator's defaults for the optional parameters.
///
/// Rows are ordered by rated power, then voltage, in catalog order.
///
/// # Errors
///
/// Returns the first construction error, which only happens when the
/// validator's defaults are out of range.
pub fn catalog_sweep(validator: &Validator) -> Result<Vec<SettingsRow>, ProtectionError> {
    let catalog = validator.catalog();
    let mut rows = Vec::with_capacity(catalog.rated_powers().len() * catalog.high_voltages().len());
    for &kva in catalog.rated_powers() {
        for &kv in catalog.high_voltages() {
            let params = TransformerParams::new().rated_power(kva).high_voltage_level(kv);
            let tr = PowerTransformer::with_validator(&params, validator)?;
            rows.push(SettingsRow::from(&tr));
        }
    }
    Ok(rows)
}

/// Exports a settings table to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(rows: &[SettingsRow], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(rows, buf)
}

/// Writes a settings table as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(rows: &[SettingsRow], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for r in rows {
        wtr.write_record(&[
            r.rated_power_kva.to_string(),
            r.high_voltage_kv.to_string(),
            format!("{:.2}", r.impedance_pct),
            format!("{:.2}", r.irush_ratio),
            format!("{:.2}", r.irush_delay_s),
            format!("{:.2}", r.nominal_current_a),
            format!("{:.2}", r.ansi_current_a),
            format!("{:.2}", r.ansi_earth_fault_current_a),
            format!("{:.2}", r.inrush_current_a),
            format!("{:.1}", r.ansi_delay_s),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
