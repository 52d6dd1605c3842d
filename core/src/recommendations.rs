//! Advisory items derived from the per-segment metrics and the balance checks.
//!
//! These do not depend on the stability score. Comparisons are strict, so a
//! Reynolds number of exactly 2000 or a 10 % imbalance raises nothing here.

use anastomo_common::locale::Locale;
use anastomo_common::vessel::Segment;
use serde::Serialize;

use crate::balance::BalanceChecks;
use crate::hemodynamics::{FlowMetrics, LAMINAR_LIMIT};
use crate::stability::{FLOW_BALANCE_LIMIT_PCT, PRESSURE_LIMIT_MMHG, SHEAR_ACCEPTABLE_BAND};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationGroup {
    FlowStabilization,
    ShearOptimization,
    Balance,
}

impl RecommendationGroup {
    /// Balance items are listed without a heading.
    pub fn heading(self, locale: Locale) -> Option<&'static str> {
        match self {
            RecommendationGroup::FlowStabilization => {
                Some(locale.pick("To stabilize the flow:", "Для стабилизации потока:"))
            }
            RecommendationGroup::ShearOptimization => Some(locale.pick(
                "To optimize shear stress:",
                "Для оптимизации напряжения сдвига:",
            )),
            RecommendationGroup::Balance => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Segment's Reynolds number is above the laminar limit.
    StabilizeFlow(Segment),
    RaiseLowShear,
    LowerHighShear,
    RebalanceFlow,
    EqualizePressure,
}

impl Recommendation {
    pub fn group(self) -> RecommendationGroup {
        match self {
            Recommendation::StabilizeFlow(_) => RecommendationGroup::FlowStabilization,
            Recommendation::RaiseLowShear | Recommendation::LowerHighShear => {
                RecommendationGroup::ShearOptimization
            }
            Recommendation::RebalanceFlow | Recommendation::EqualizePressure => {
                RecommendationGroup::Balance
            }
        }
    }

    pub fn text(self, locale: Locale) -> &'static str {
        match self {
            Recommendation::StabilizeFlow(Segment::Donor) => locale.pick(
                "Increase the donor artery diameter or reduce the flow velocity",
                "Увеличьте диаметр донорской артерии или уменьшите скорость потока",
            ),
            Recommendation::StabilizeFlow(Segment::Acceptor) => locale.pick(
                "Increase the acceptor artery diameter or reduce the flow velocity",
                "Увеличьте диаметр акцепторной артерии или уменьшите скорость потока",
            ),
            Recommendation::StabilizeFlow(Segment::Outflow) => locale.pick(
                "Increase the outflow artery diameter",
                "Увеличьте диаметр отводящей артерии",
            ),
            Recommendation::RaiseLowShear => locale.pick(
                "Increase flow velocity in vessels with low shear stress",
                "Увеличьте скорость потока в сосудах с низким напряжением сдвига",
            ),
            Recommendation::LowerHighShear => locale.pick(
                "Reduce flow velocity in vessels with high shear stress",
                "Уменьшите скорость потока в сосудах с высоким напряжением сдвига",
            ),
            Recommendation::RebalanceFlow => locale.pick(
                "Adjust vessel diameters to restore flow balance",
                "Скорректируйте диаметры сосудов для соблюдения баланса потоков",
            ),
            Recommendation::EqualizePressure => locale.pick(
                "Bring donor and acceptor pressures closer together",
                "Добейтесь большего равенства давлений в донорской и акцепторной артериях",
            ),
        }
    }
}

/// Recommendations in display order. `metrics` follows [`Segment::ALL`].
pub fn recommend(metrics: &[FlowMetrics; 3], balance: &BalanceChecks) -> Vec<Recommendation> {
    let mut items = Vec::new();

    for (segment, m) in Segment::ALL.iter().zip(metrics) {
        if m.reynolds > LAMINAR_LIMIT {
            items.push(Recommendation::StabilizeFlow(*segment));
        }
    }

    let (low, high) = SHEAR_ACCEPTABLE_BAND;
    if metrics.iter().any(|m| m.shear_stress_pa < low) {
        items.push(Recommendation::RaiseLowShear);
    }
    if metrics.iter().any(|m| m.shear_stress_pa > high) {
        items.push(Recommendation::LowerHighShear);
    }

    if balance.flow_balance_error_pct > FLOW_BALANCE_LIMIT_PCT {
        items.push(Recommendation::RebalanceFlow);
    }
    if balance.pressure_diff_mmhg > PRESSURE_LIMIT_MMHG {
        items.push(Recommendation::EqualizePressure);
    }

    items
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
    use crate::hemodynamics::classify_flow;

    fn metrics(reynolds: f64, shear_stress_pa: f64) -> FlowMetrics {
        FlowMetrics {
            reynolds,
            shear_stress_pa,
            volumetric_flow_m3_s: 1.0e-7,
            flow_class: classify_flow(reynolds),
        }
    }

    fn calm() -> BalanceChecks {
        BalanceChecks {
            flow_balance_error_pct: 0.0,
            pressure_diff_mmhg: 0.0,
        }
    }

    #[test]
    fn healthy_readings_need_nothing() {
        let all = [metrics(30.0, 2.0); 3];
        assert!(recommend(&all, &calm()).is_empty());
    }

    #[test]
    fn flags_each_segment_above_laminar_limit() {
        let all = [metrics(2500.0, 2.0), metrics(30.0, 2.0), metrics(4100.0, 2.0)];
        assert_eq!(
            recommend(&all, &calm()),
            vec![
                Recommendation::StabilizeFlow(Segment::Donor),
                Recommendation::StabilizeFlow(Segment::Outflow),
            ]
        );
    }

    #[test]
    fn reynolds_at_limit_is_not_flagged() {
        let all = [metrics(2000.0, 2.0); 3];
        assert!(recommend(&all, &calm()).is_empty());
    }

    #[test]
    fn shear_items_are_raised_once() {
        let all = [metrics(30.0, 0.2), metrics(30.0, 0.3), metrics(30.0, 4.5)];
        assert_eq!(
            recommend(&all, &calm()),
            vec![Recommendation::RaiseLowShear, Recommendation::LowerHighShear]
        );
    }

    #[test]
    fn shear_band_edges_are_not_flagged() {
        let all = [metrics(30.0, 0.5), metrics(30.0, 4.0), metrics(30.0, 2.0)];
        assert!(recommend(&all, &calm()).is_empty());
    }

    #[test]
    fn balance_items_use_strict_limits() {
        let all = [metrics(30.0, 2.0); 3];
        let at_limit = BalanceChecks {
            flow_balance_error_pct: 10.0,
            pressure_diff_mmhg: 10.0,
        };
        assert!(recommend(&all, &at_limit).is_empty());

        let beyond = BalanceChecks {
            flow_balance_error_pct: 10.5,
            pressure_diff_mmhg: 12.0,
        };
        assert_eq!(
            recommend(&all, &beyond),
            vec![Recommendation::RebalanceFlow, Recommendation::EqualizePressure]
        );
    }

    #[test]
    fn groups_and_headings() {
        assert_eq!(
            Recommendation::StabilizeFlow(Segment::Acceptor).group(),
            RecommendationGroup::FlowStabilization
        );
        assert_eq!(
            Recommendation::LowerHighShear.group(),
            RecommendationGroup::ShearOptimization
        );
        assert_eq!(RecommendationGroup::Balance.heading(Locale::En), None);
        assert_eq!(
            RecommendationGroup::FlowStabilization.heading(Locale::Ru),
            Some("Для стабилизации потока:")
        );
    }

    #[test]
    fn outflow_advice_differs_from_inflow_advice() {
        let outflow = Recommendation::StabilizeFlow(Segment::Outflow).text(Locale::En);
        assert!(!outflow.contains("velocity"));
        let donor = Recommendation::StabilizeFlow(Segment::Donor).text(Locale::En);
        assert!(donor.contains("donor") && donor.contains("velocity"));
    }
}
