//! Name-based read access to sealed entities.
//!
//! Entities implementing [`SealedEntity`] expose every field by name, but
//! every write path (`set`, `define`, `delete`) is refused with
//! [`ProtectionError::IllegalMutation`].

use std::fmt;

use tracing::warn;

use crate::error::ProtectionError;

/// Readable fields of a power transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    RatedPower,
    HighVoltageLevel,
    Impedance,
    IrushRatio,
    IrushDelay,
    NominalCurrent,
    AnsiCurrent,
    AnsiEarthFaultCurrent,
    InrushCurrent,
    AnsiDelay,
}

impl Property {
    /// Every property, inputs first.
    pub const ALL: [Property; 10] = [
        Property::RatedPower,
        Property::HighVoltageLevel,
        Property::Impedance,
        Property::IrushRatio,
        Property::IrushDelay,
        Property::NominalCurrent,
        Property::AnsiCurrent,
        Property::AnsiEarthFaultCurrent,
        Property::InrushCurrent,
        Property::AnsiDelay,
    ];

    /// Canonical camelCase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::RatedPower => "ratedPower",
            Self::HighVoltageLevel => "highVoltageLevel",
            Self::Impedance => "impedance",
            Self::IrushRatio => "irushRatio",
            Self::IrushDelay => "irushDelay",
            Self::NominalCurrent => "nominalCurrent",
            Self::AnsiCurrent => "ansiCurrent",
            Self::AnsiEarthFaultCurrent => "ansiEarthFaultCurrent",
            Self::InrushCurrent => "rushCurrent",
            Self::AnsiDelay => "ansiDelay",
        }
    }

    /// Resolves a camelCase name, a snake_case name or a short alias
    /// (`iAnsi`, `inAnsi`).
    pub fn from_name(name: &str) -> Option<Self> {
        let property = match name {
            "ratedPower" | "rated_power" => Self::RatedPower,
            "highVoltageLevel" | "high_voltage_level" => Self::HighVoltageLevel,
            "impedance" => Self::Impedance,
            "irushRatio" | "irush_ratio" => Self::IrushRatio,
            "irushDelay" | "irush_delay" => Self::IrushDelay,
            "nominalCurrent" | "nominal_current" => Self::NominalCurrent,
            "ansiCurrent" | "ansi_current" | "iAnsi" => Self::AnsiCurrent,
            "ansiEarthFaultCurrent" | "ansi_earth_fault_current" | "inAnsi" => {
                Self::AnsiEarthFaultCurrent
            }
            "rushCurrent" | "inrushCurrent" | "inrush_current" => Self::InrushCurrent,
            "ansiDelay" | "ansi_delay" => Self::AnsiDelay,
            _ => return None,
        };
        Some(property)
    }

    /// Returns `true` for quantities computed from the inputs.
    pub fn is_derived(self) -> bool {
        matches!(
            self,
            Self::NominalCurrent
                | Self::AnsiCurrent
                | Self::AnsiEarthFaultCurrent
                | Self::InrushCurrent
                | Self::AnsiDelay
        )
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An entity whose fields are fixed at construction.
///
/// Only [`SealedEntity::property`] needs implementing. The provided write
/// methods take `&mut self` so that even an exclusive borrow cannot
/// change a sealed value: they always fail and never touch `self`.
pub trait SealedEntity {
    /// Reads one property.
    fn property(&self, property: Property) -> f64;

    /// Reads a property by name; `None` for names the entity does not have.
    fn get(&self, name: &str) -> Option<f64> {
        Property::from_name(name).map(|p| self.property(p))
    }

    /// Snapshot of every property in [`Property::ALL`] order.
    fn properties(&self) -> Vec<(Property, f64)> {
        Property::ALL
            .iter()
            .map(|&p| (p, self.property(p)))
            .collect()
    }

    /// Assigns a value to a field. Always refused.
    ///
    /// # Errors
    ///
    /// Returns [`ProtectionError::IllegalMutation`] for every field name.
    fn set(&mut self, name: &str, value: f64) -> Result<(), ProtectionError> {
        warn!(field = name, value, "refused assignment on sealed entity");
        Err(ProtectionError::IllegalMutation(name.to_string()))
    }

    /// Defines a field, new or existing. Always refused.
    ///
    /// # Errors
    ///
    /// Returns [`ProtectionError::IllegalMutation`] for every field name.
    fn define(&mut self, name: &str, value: f64) -> Result<(), ProtectionError> {
        warn!(field = name, value, "refused definition on sealed entity");
        Err(ProtectionError::IllegalMutation(name.to_string()))
    }

    /// Deletes a field. Always refused.
    ///
    /// # Errors
    ///
    /// Returns [`ProtectionError::IllegalMutation`] for every field name.
    fn delete(&mut self, name: &str) -> Result<(), ProtectionError> {
        warn!(field = name, "refused deletion on sealed entity");
        Err(ProtectionError::IllegalMutation(name.to_string()))
    }

    /// Sealed entities are frozen for their whole lifetime.
    fn is_frozen(&self) -> bool {
        true
    }
}
