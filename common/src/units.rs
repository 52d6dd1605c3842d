//! Unit conversions between the clinical units readings are entered in and the
//! SI units the formulas work in.

pub const MM_TO_M: f64 = 0.001;
pub const CM_S_TO_M_S: f64 = 0.01;
pub const M3_S_TO_ML_S: f64 = 1e6;

pub fn mm_to_m(mm: f64) -> f64 {
    mm * MM_TO_M
}

pub fn cm_s_to_m_s(cm_s: f64) -> f64 {
    cm_s * CM_S_TO_M_S
}

pub fn m3_s_to_ml_s(m3_s: f64) -> f64 {
    m3_s * M3_S_TO_ML_S
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

    const EPS: f64 = 1e-12;

    #[test]
    fn millimetres_to_metres() {
        assert!((mm_to_m(1.2) - 0.0012).abs() < EPS);
        assert_eq!(mm_to_m(0.0), 0.0);
    }

    #[test]
    fn centimetres_per_second_to_metres_per_second() {
        assert!((cm_s_to_m_s(8.0) - 0.08).abs() < EPS);
        assert!((cm_s_to_m_s(100.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn cubic_metres_to_millilitres() {
        assert!((m3_s_to_ml_s(1.5e-7) - 0.15).abs() < EPS);
    }
}
