//! # Flow Models
//!
//! Steady, fully developed laminar-flow approximations for a single vessel.
//! All functions take SI units: metres and metres per second.

use std::f64::consts::PI;

use anastomo_common::locale::Locale;
use anastomo_common::vessel::VesselReading;
use serde::Serialize;
use tracing::warn;

/// Blood density, kg/m³.
pub const BLOOD_DENSITY: f64 = 1060.0;
/// Dynamic viscosity of blood, Pa·s.
pub const BLOOD_VISCOSITY: f64 = 0.0035;

/// Reynolds numbers below this are laminar.
pub const LAMINAR_LIMIT: f64 = 2000.0;
/// Reynolds numbers at or above this are turbulent.
pub const TURBULENT_THRESHOLD: f64 = 4000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowClass {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowClass {
    pub fn tag(self) -> &'static str {
        match self {
            FlowClass::Laminar => "🟢",
            FlowClass::Transitional => "🟡",
            FlowClass::Turbulent => "🔴",
        }
    }

    pub fn name(self, locale: Locale) -> &'static str {
        match self {
            FlowClass::Laminar => locale.pick("Laminar", "Ламинарный"),
            FlowClass::Transitional => locale.pick("Transitional", "Переходный"),
            FlowClass::Turbulent => locale.pick("Turbulent", "Турбулентный"),
        }
    }

    /// Tag and name, e.g. `🟢 Laminar`.
    pub fn label(self, locale: Locale) -> String {
        format!("{} {}", self.tag(), self.name(locale))
    }
}

/// `Re = ρ·v·d / μ`. Zero diameter yields zero.
pub fn reynolds(diameter_m: f64, velocity_m_s: f64) -> f64 {
    if diameter_m == 0.0 {
        return 0.0;
    }
    (BLOOD_DENSITY * velocity_m_s * diameter_m) / BLOOD_VISCOSITY
}

pub fn classify_flow(reynolds: f64) -> FlowClass {
    if reynolds < LAMINAR_LIMIT {
        FlowClass::Laminar
    } else if reynolds < TURBULENT_THRESHOLD {
        FlowClass::Transitional
    } else {
        FlowClass::Turbulent
    }
}

/// Wall shear stress `τ = 8·μ·v / d` in pascals. Zero diameter yields zero.
pub fn wall_shear_stress(diameter_m: f64, velocity_m_s: f64) -> f64 {
    if diameter_m == 0.0 {
        return 0.0;
    }
    (8.0 * BLOOD_VISCOSITY * velocity_m_s) / diameter_m
}

/// Mean velocity times circular cross-section, m³/s.
pub fn volumetric_flow(diameter_m: f64, velocity_m_s: f64) -> f64 {
    velocity_m_s * (PI * (diameter_m / 2.0).powi(2))
}

/// Everything derived from a single vessel reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowMetrics {
    pub reynolds: f64,
    pub shear_stress_pa: f64,
    pub volumetric_flow_m3_s: f64,
    pub flow_class: FlowClass,
}

impl FlowMetrics {
    pub fn from_reading(reading: &VesselReading) -> Self {
        let diameter_m = reading.diameter_m();
        let velocity_m_s = reading.velocity_m_s();

        if diameter_m == 0.0 {
            warn!("zero vessel diameter, reporting zero Reynolds number and shear stress");
        }

        let reynolds = reynolds(diameter_m, velocity_m_s);
        Self {
            reynolds,
            shear_stress_pa: wall_shear_stress(diameter_m, velocity_m_s),
            volumetric_flow_m3_s: volumetric_flow(diameter_m, velocity_m_s),
            flow_class: classify_flow(reynolds),
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

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn zero_diameter_guards() {
        for v in [0.0, 0.08, 1.0] {
            assert_eq!(reynolds(0.0, v), 0.0);
            assert_eq!(wall_shear_stress(0.0, v), 0.0);
            assert_eq!(volumetric_flow(0.0, v), 0.0);
        }
    }

    #[test]
    fn donor_example_values() {
        let re = reynolds(0.0012, 0.08);
        assert!(close(re, 29.074_285_714, 1e-6), "re = {re}");
        assert_eq!(classify_flow(re), FlowClass::Laminar);

        let tau = wall_shear_stress(0.0012, 0.08);
        assert!(close(tau, 1.866_666_667, 1e-6), "tau = {tau}");
    }

    #[test]
    fn reynolds_scales_linearly() {
        let base = reynolds(0.002, 0.1);
        assert!(close(reynolds(0.002, 0.3), 3.0 * base, 1e-9));
        assert!(close(reynolds(0.005, 0.1), 2.5 * base, 1e-9));
    }

    #[test]
    fn shear_stress_is_inverse_in_diameter() {
        let base = wall_shear_stress(0.001, 0.1);
        assert!(close(base, 2.8, 1e-12));
        assert!(close(wall_shear_stress(0.002, 0.1), base / 2.0, 1e-12));
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(classify_flow(0.0), FlowClass::Laminar);
        assert_eq!(classify_flow(1999.999), FlowClass::Laminar);
        assert_eq!(classify_flow(2000.0), FlowClass::Transitional);
        assert_eq!(classify_flow(3999.999), FlowClass::Transitional);
        assert_eq!(classify_flow(4000.0), FlowClass::Turbulent);
        assert_eq!(classify_flow(1.0e6), FlowClass::Turbulent);
    }

    #[test]
    fn volumetric_flow_uses_circular_section() {
        let q = volumetric_flow(0.0012, 0.08);
        assert!(close(q, 0.08 * PI * 0.0006 * 0.0006, 1e-18));
        assert!(close(q * 1e6, 0.090_477_868, 1e-8));
    }

    #[test]
    fn metrics_from_reading_convert_units_first() {
        let metrics = FlowMetrics::from_reading(&VesselReading::new(1.0, 10.0, 75.0));
        assert!(close(metrics.reynolds, 30.285_714_286, 1e-6));
        assert!(close(metrics.shear_stress_pa, 2.8, 1e-12));
        assert_eq!(metrics.flow_class, FlowClass::Laminar);
    }

    #[test]
    fn metrics_with_zero_diameter_are_all_zero() {
        let metrics = FlowMetrics::from_reading(&VesselReading::new(0.0, 50.0, 90.0));
        assert_eq!(metrics.reynolds, 0.0);
        assert_eq!(metrics.shear_stress_pa, 0.0);
        assert_eq!(metrics.volumetric_flow_m3_s, 0.0);
        assert_eq!(metrics.flow_class, FlowClass::Laminar);
    }

    #[test]
    fn labels_carry_tag_and_localized_name() {
        assert_eq!(FlowClass::Laminar.label(Locale::En), "🟢 Laminar");
        assert_eq!(FlowClass::Turbulent.label(Locale::Ru), "🔴 Турбулентный");
    }
}
