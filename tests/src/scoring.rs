#![cfg(test)]
use anastomo_core::balance::{BalanceChecks, flow_balance_error};
use anastomo_core::hemodynamics::{FlowMetrics, classify_flow, reynolds, wall_shear_stress};
use anastomo_core::stability::{Criterion, StabilityAssessment, Verdict};

fn metrics(re: f64, tau: f64) -> FlowMetrics {
    FlowMetrics {
        reynolds: re,
        shear_stress_pa: tau,
        volumetric_flow_m3_s: 1.0e-7,
        flow_class: classify_flow(re),
    }
}

fn points_for(criterion: Criterion, error: f64) -> u8 {
    let all = [metrics(30.0, 2.0); 3];
    let balance = BalanceChecks {
        flow_balance_error_pct: error,
        pressure_diff_mmhg: error,
    };
    StabilityAssessment::assess(&all, &balance)
        .outcome(criterion)
        .points
}

#[test]
fn balance_criteria_only_drop_at_ten() {
    for criterion in [Criterion::FlowBalance, Criterion::PressureBalance] {
        assert_eq!(points_for(criterion, 3.0), 1);
        assert_eq!(points_for(criterion, 7.0), 1);
        assert_eq!(points_for(criterion, 9.999), 1);
        assert_eq!(points_for(criterion, 10.0), 0);
    }
}

#[test]
fn moderate_balance_still_reaches_a_perfect_score() {
    let all = [metrics(30.0, 2.0); 3];
    let balance = BalanceChecks {
        flow_balance_error_pct: 9.0,
        pressure_diff_mmhg: 9.0,
    };
    let assessment = StabilityAssessment::assess(&all, &balance);
    assert_eq!(assessment.score, 6);
    assert_eq!(assessment.verdict, Verdict::Stable);
}

#[test]
fn zero_diameter_and_zero_outflow_guards() {
    assert_eq!(reynolds(0.0, 0.5), 0.0);
    assert_eq!(wall_shear_stress(0.0, 0.5), 0.0);
    assert_eq!(flow_balance_error(3.0, 4.0, 0.0), 100.0);
}
