#![cfg(test)]
use anastomo_common::locale::Locale;
use anastomo_common::vessel::{Anastomosis, Segment, VesselReading};
use anastomo_core::hemodynamics::FlowClass;
use anastomo_core::recommendations::Recommendation;
use anastomo_core::stability::{Criterion, Grade, Verdict};
use anastomo_core::{Evaluation, Report, evaluate};

/*************************************************************
                    Reference readings
**************************************************************/

#[test]
fn reference_readings_score_five() {
    let evaluation: Evaluation = evaluate(&Anastomosis::default());

    let donor = evaluation.segment(Segment::Donor).metrics;
    assert!((donor.reynolds - 29.07).abs() < 0.01, "donor Re {}", donor.reynolds);
    assert!((donor.shear_stress_pa - 1.867).abs() < 0.001);

    let expected_error = (21.52_f64 - 21.6).abs() / 21.6 * 100.0;
    assert!((evaluation.balance.flow_balance_error_pct - expected_error).abs() < 1e-6);
    assert_eq!(evaluation.balance.pressure_diff_mmhg, 5.0);

    assert_eq!(evaluation.stability.score, 5);
    assert_eq!(evaluation.stability.verdict, Verdict::Stable);
    assert!(evaluation.recommendations.is_empty());
}

/*************************************************************
                    Degraded anastomoses
**************************************************************/

#[test]
fn mismatched_outflow_needs_observation() {
    let anastomosis = Anastomosis::new(
        VesselReading::new(1.0, 10.0, 80.0),
        VesselReading::new(1.0, 10.0, 100.0),
        VesselReading::new(2.0, 5.0, 90.0),
    );
    let evaluation = evaluate(&anastomosis);

    assert!(evaluation.balance.flow_balance_error_pct < 1e-9);
    assert_eq!(
        evaluation.stability.outcome(Criterion::ShearStress).grade,
        Grade::Acceptable
    );
    assert_eq!(
        evaluation.stability.outcome(Criterion::PressureBalance).grade,
        Grade::Critical
    );
    assert_eq!(evaluation.stability.score, 4);
    assert_eq!(evaluation.stability.verdict, Verdict::NeedsObservation);
    assert_eq!(
        evaluation.recommendations,
        vec![Recommendation::EqualizePressure]
    );
}

#[test]
fn wide_slow_vessels_are_high_risk() {
    let anastomosis = Anastomosis::new(
        VesselReading::new(5.0, 1.0, 200.0),
        VesselReading::new(5.0, 1.0, 10.0),
        VesselReading::new(5.0, 1.0, 100.0),
    );
    let evaluation = evaluate(&anastomosis);

    assert_eq!(evaluation.stability.score, 2);
    assert_eq!(evaluation.stability.verdict, Verdict::HighRisk);
    assert_eq!(
        evaluation.recommendations,
        vec![
            Recommendation::RaiseLowShear,
            Recommendation::RebalanceFlow,
            Recommendation::EqualizePressure,
        ]
    );
}

#[test]
fn input_range_never_reaches_turbulence() {
    // Widest and fastest vessel the input layer accepts.
    let fastest = VesselReading::new(5.0, 100.0, 100.0);
    let evaluation = evaluate(&Anastomosis::new(fastest, fastest, fastest));

    for analysis in &evaluation.segments {
        assert!(analysis.metrics.reynolds < 2000.0);
        assert_eq!(analysis.metrics.flow_class, FlowClass::Laminar);
    }
}

#[test]
fn oversized_vessels_are_turbulent() {
    // Outside the input bounds; the evaluator still accepts them.
    let huge = VesselReading::new(20.0, 100.0, 100.0);
    let evaluation = evaluate(&Anastomosis::new(huge, huge, huge));

    assert!(evaluation
        .segments
        .iter()
        .all(|s| s.metrics.flow_class == FlowClass::Turbulent));
    assert_eq!(
        evaluation.stability.outcome(Criterion::FlowRegime).grade,
        Grade::Critical
    );
    assert_eq!(evaluation.recommendations.len(), 4);
    assert_eq!(
        evaluation.recommendations[..3],
        Segment::ALL.map(Recommendation::StabilizeFlow)
    );
}

/*************************************************************
                        Reports
**************************************************************/

#[test]
fn report_json_matches_evaluation() {
    let evaluation = evaluate(&Anastomosis::default());
    let report = Report::new(&evaluation, Locale::Ru);
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["locale"], "ru");
    assert_eq!(value["score"], evaluation.stability.score);
    assert_eq!(value["verdict_label"], "✅ Анастомоз стабилен");
    assert_eq!(value["segments"][1]["name"], "Акцепторная артерия");
    assert_eq!(value["segments"][1]["shear_stress_display"], "2.80 Па");
}
