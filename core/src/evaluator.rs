//! # Evaluator
//!
//! Runs the flow models, balance checks, scoring and recommendations for one
//! set of readings. The result owns copies of its inputs and nothing is kept
//! between calls.

use anastomo_common::vessel::{Anastomosis, Segment, VesselReading};
use serde::Serialize;
use tracing::debug;

use crate::balance::BalanceChecks;
use crate::hemodynamics::FlowMetrics;
use crate::recommendations::{Recommendation, recommend};
use crate::stability::StabilityAssessment;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentAnalysis {
    pub segment: Segment,
    pub reading: VesselReading,
    pub metrics: FlowMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// One entry per segment, in [`Segment::ALL`] order.
    pub segments: [SegmentAnalysis; 3],
    pub balance: BalanceChecks,
    pub stability: StabilityAssessment,
    pub recommendations: Vec<Recommendation>,
}

impl Evaluation {
    pub fn segment(&self, segment: Segment) -> &SegmentAnalysis {
        // segments are stored in Segment::ALL order
        &self.segments[segment as usize]
    }
}

pub fn evaluate(anastomosis: &Anastomosis) -> Evaluation {
    let segments = anastomosis.segments().map(|(segment, reading)| {
        let metrics = FlowMetrics::from_reading(&reading);
        debug!(
            %segment,
            reynolds = metrics.reynolds,
            shear_stress_pa = metrics.shear_stress_pa,
            volumetric_flow_m3_s = metrics.volumetric_flow_m3_s,
            "segment metrics"
        );
        SegmentAnalysis {
            segment,
            reading,
            metrics,
        }
    });

    let [donor, acceptor, outflow] = segments;
    let balance = BalanceChecks::new(
        donor.metrics.volumetric_flow_m3_s,
        acceptor.metrics.volumetric_flow_m3_s,
        outflow.metrics.volumetric_flow_m3_s,
        donor.reading.pressure_mmhg,
        acceptor.reading.pressure_mmhg,
    );

    let metrics = segments.map(|s| s.metrics);
    let stability = StabilityAssessment::assess(&metrics, &balance);
    let recommendations = recommend(&metrics, &balance);

    debug!(
        flow_balance_error_pct = balance.flow_balance_error_pct,
        pressure_diff_mmhg = balance.pressure_diff_mmhg,
        score = stability.score,
        recommendations = recommendations.len(),
        "evaluation complete"
    );

    Evaluation {
        segments,
        balance,
        stability,
        recommendations,
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
