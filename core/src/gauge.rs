//! Full-scale fractions for the Reynolds and shear stress gauges.

/// Reynolds number drawn as a full gauge.
pub const REYNOLDS_FULL_SCALE: f64 = 5000.0;
/// Shear stress drawn as a full gauge, Pa.
pub const SHEAR_FULL_SCALE_PA: f64 = 5.0;

/// `value / full_scale`, clamped to `0.0..=1.0`.
pub fn gauge_fraction(value: f64, full_scale: f64) -> f64 {
    if full_scale <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / full_scale).clamp(0.0, 1.0)
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

    #[test]
    fn scales_linearly_below_full() {
        assert_eq!(gauge_fraction(2500.0, REYNOLDS_FULL_SCALE), 0.5);
        assert_eq!(gauge_fraction(1.0, SHEAR_FULL_SCALE_PA), 0.2);
    }

    #[test]
    fn clamps_to_unit_range() {
        assert_eq!(gauge_fraction(12_000.0, REYNOLDS_FULL_SCALE), 1.0);
        assert_eq!(gauge_fraction(-1.0, SHEAR_FULL_SCALE_PA), 0.0);
        assert_eq!(gauge_fraction(f64::NAN, SHEAR_FULL_SCALE_PA), 0.0);
        assert_eq!(gauge_fraction(3.0, 0.0), 0.0);
    }
}
