//! # Vessel Readings
//!
//! The three segments that meet at the anastomosis and the raw measurements
//! taken on each of them.

use std::fmt;

use serde::Serialize;

use crate::locale::Locale;
use crate::units;

/// A vessel segment joined at the anastomosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Donor,
    Acceptor,
    Outflow,
}

impl Segment {
    /// Display order used everywhere results are listed.
    pub const ALL: [Segment; 3] = [Segment::Donor, Segment::Acceptor, Segment::Outflow];

    pub fn name(self, locale: Locale) -> &'static str {
        match self {
            Segment::Donor => locale.pick("Donor artery", "Донорская артерия"),
            Segment::Acceptor => locale.pick("Acceptor artery", "Акцепторная артерия"),
            Segment::Outflow => locale.pick("Outflow artery", "Отводящая артерия"),
        }
    }

    pub fn short_name(self, locale: Locale) -> &'static str {
        match self {
            Segment::Donor => locale.pick("Donor", "Донорская"),
            Segment::Acceptor => locale.pick("Acceptor", "Акцепторная"),
            Segment::Outflow => locale.pick("Outflow", "Отводящая"),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name(Locale::En))
    }
}

/// One segment's measurements in clinical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VesselReading {
    pub diameter_mm: f64,
    pub velocity_cm_s: f64,
    pub pressure_mmhg: f64,
}

impl VesselReading {
    pub fn new(diameter_mm: f64, velocity_cm_s: f64, pressure_mmhg: f64) -> Self {
        Self {
            diameter_mm,
            velocity_cm_s,
            pressure_mmhg,
        }
    }


    pub fn diameter_m(&self) -> f64 {
        units::mm_to_m(self.diameter_mm)
    }

    pub fn velocity_m_s(&self) -> f64 {
        units::cm_s_to_m_s(self.velocity_cm_s)
    }
}

/// Readings for all three segments of one anastomosis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anastomosis {
    pub donor: VesselReading,
    pub acceptor: VesselReading,
    pub outflow: VesselReading,
}

impl Anastomosis {
    pub fn new(donor: VesselReading, acceptor: VesselReading, outflow: VesselReading) -> Self {
        Self {
            donor,
            acceptor,
            outflow,
        }
    }

    pub fn reading(&self, segment: Segment) -> &VesselReading {
        match segment {
            Segment::Donor => &self.donor,
            Segment::Acceptor => &self.acceptor,
            Segment::Outflow => &self.outflow,
        }
    }

    /// Readings paired with their segment, in display order.
    pub fn segments(&self) -> [(Segment, VesselReading); 3] {
        Segment::ALL.map(|segment| (segment, *self.reading(segment)))
    }
}

impl Default for Anastomosis {
    fn default() -> Self {
        Self {
            donor: VesselReading::new(1.2, 8.0, 80.0),
            acceptor: VesselReading::new(1.0, 10.0, 75.0),
            outflow: VesselReading::new(1.2, 15.0, 78.0),
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::{DIAMETER_MM, PRESSURE_MMHG, VELOCITY_CM_S};

    #[test]
    fn si_accessors_convert_units() {
        let reading = VesselReading::new(1.2, 8.0, 80.0);
        assert!((reading.diameter_m() - 0.0012).abs() < 1e-12);
        assert!((reading.velocity_m_s() - 0.08).abs() < 1e-12);
    }

    #[test]
    fn default_readings_are_within_bounds() {
        for (_, reading) in Anastomosis::default().segments() {
            assert!(DIAMETER_MM.contains(reading.diameter_mm));
            assert!(VELOCITY_CM_S.contains(reading.velocity_cm_s));
            assert!(PRESSURE_MMHG.contains(reading.pressure_mmhg));
        }
    }

    #[test]
    fn segments_follow_display_order() {
        let anastomosis = Anastomosis::default();
        let order: Vec<Segment> = anastomosis.segments().iter().map(|(s, _)| *s).collect();
        assert_eq!(order, Segment::ALL.to_vec());
        assert_eq!(anastomosis.reading(Segment::Outflow).velocity_cm_s, 15.0);
    }

    #[test]
    fn segment_names_are_localized() {
        assert_eq!(Segment::Acceptor.name(Locale::En), "Acceptor artery");
        assert_eq!(Segment::Acceptor.name(Locale::Ru), "Акцепторная артерия");
        assert_eq!(Segment::Outflow.to_string(), "Outflow");
    }
}
