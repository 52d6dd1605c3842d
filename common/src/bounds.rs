//! # Input Bounds
//!
//! Ranges the input layer accepts for each reading. The evaluator itself is
//! total over non-negative values; these limits only guard what a user can type.

use std::fmt;

use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Diameter,
    Velocity,
    Pressure,
}

impl Quantity {
    pub fn unit(self) -> &'static str {
        match self {
            Quantity::Diameter => "mm",
            Quantity::Velocity => "cm/s",
            Quantity::Pressure => "mmHg",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Diameter => "diameter",
            Quantity::Velocity => "velocity",
            Quantity::Pressure => "pressure",
        };
        f.write_str(name)
    }
}

/// Inclusive range for one quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub quantity: Quantity,
    pub min: f64,
    pub max: f64,
}

pub const DIAMETER_MM: Bounds = Bounds {
    quantity: Quantity::Diameter,
    min: 0.1,
    max: 5.0,
};

pub const VELOCITY_CM_S: Bounds = Bounds {
    quantity: Quantity::Velocity,
    min: 1.0,
    max: 100.0,
};

pub const PRESSURE_MMHG: Bounds = Bounds {
    quantity: Quantity::Pressure,
    min: 10.0,
    max: 200.0,
};

impl Bounds {
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn check(&self, value: f64) -> Result<f64, InputError> {
        if !value.is_finite() {
            return Err(InputError::NotFinite {
                quantity: self.quantity,
                value,
            });
        }

        if !self.contains(value) {
            return Err(InputError::OutOfRange {
                quantity: self.quantity,
                value,
                min: self.min,
                max: self.max,
            });
        }

        Ok(value)
    }

    /// Parses a user-supplied number and checks it against the range.
    pub fn parse(&self, input: &str) -> Result<f64, InputError> {
        let value: f64 = input
            .trim()
            .parse()
            .map_err(|_| InputError::NotANumber {
                quantity: self.quantity,
                input: input.to_string(),
            })?;
        self.check(value)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
