//! # Report Model
//!
//! A flattened, localized view of an [`Evaluation`] with every number already
//! formatted for display. The terminal printer and `--json` output both read
//! from this, so the two never disagree on rounding.

use anastomo_common::locale::Locale;
use anastomo_common::units;
use anastomo_common::vessel::{Segment, VesselReading};
use serde::Serialize;

use crate::evaluator::{Evaluation, SegmentAnalysis};
use crate::gauge::{REYNOLDS_FULL_SCALE, SHEAR_FULL_SCALE_PA, gauge_fraction};
use crate::hemodynamics::FlowClass;
use crate::recommendations::RecommendationGroup;
use crate::stability::{Criterion, Grade, MAX_SCORE, Verdict};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentReport {
    pub segment: Segment,
    pub name: String,
    pub reading: VesselReading,
    pub flow_class: FlowClass,
    pub flow_label: String,
    pub reynolds: f64,
    pub reynolds_display: String,
    pub reynolds_gauge: f64,
    pub shear_stress_pa: f64,
    pub shear_stress_display: String,
    pub shear_stress_gauge: f64,
    pub volumetric_flow_ml_s: f64,
    pub volumetric_flow_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackLine {
    pub criterion: Criterion,
    pub name: String,
    pub grade: Grade,
    pub points: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationLine {
    pub group: RecommendationGroup,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub locale: Locale,
    pub segments: Vec<SegmentReport>,
    pub flow_balance_error_pct: f64,
    pub pressure_diff_mmhg: f64,
    pub score: u8,
    pub max_score: u8,
    pub score_label: String,
    pub verdict: Verdict,
    pub verdict_label: String,
    pub feedback: Vec<FeedbackLine>,
    pub recommendations: Vec<RecommendationLine>,
}

pub fn format_reynolds(reynolds: f64) -> String {
    format!("{reynolds:.0}")
}

pub fn format_shear_stress(shear_stress_pa: f64, locale: Locale) -> String {
    format!("{shear_stress_pa:.2} {}", locale.pick("Pa", "Па"))
}

pub fn format_flow(volumetric_flow_ml_s: f64, locale: Locale) -> String {
    format!("{volumetric_flow_ml_s:.2} {}", locale.pick("mL/s", "мл/с"))
}

impl SegmentReport {
    fn new(analysis: &SegmentAnalysis, locale: Locale) -> Self {
        let metrics = &analysis.metrics;
        let flow_ml_s = units::m3_s_to_ml_s(metrics.volumetric_flow_m3_s);

        Self {
            segment: analysis.segment,
            name: analysis.segment.name(locale).to_string(),
            reading: analysis.reading,
            flow_class: metrics.flow_class,
            flow_label: metrics.flow_class.label(locale),
            reynolds: metrics.reynolds,
            reynolds_display: format_reynolds(metrics.reynolds),
            reynolds_gauge: gauge_fraction(metrics.reynolds, REYNOLDS_FULL_SCALE),
            shear_stress_pa: metrics.shear_stress_pa,
            shear_stress_display: format_shear_stress(metrics.shear_stress_pa, locale),
            shear_stress_gauge: gauge_fraction(metrics.shear_stress_pa, SHEAR_FULL_SCALE_PA),
            volumetric_flow_ml_s: flow_ml_s,
            volumetric_flow_display: format_flow(flow_ml_s, locale),
        }
    }
}

impl Report {
    pub fn new(evaluation: &Evaluation, locale: Locale) -> Self {
        let stability = &evaluation.stability;

        let feedback = stability
            .outcomes
            .iter()
            .map(|outcome| FeedbackLine {
                criterion: outcome.criterion,
                name: outcome.criterion.name(locale).to_string(),
                grade: outcome.grade,
                points: outcome.points,
                text: outcome.feedback(locale),
            })
            .collect();

        let recommendations = evaluation
            .recommendations
            .iter()
            .map(|item| RecommendationLine {
                group: item.group(),
                text: item.text(locale).to_string(),
            })
            .collect();

        Self {
            locale,
            segments: evaluation
                .segments
                .iter()
                .map(|s| SegmentReport::new(s, locale))
                .collect(),
            flow_balance_error_pct: evaluation.balance.flow_balance_error_pct,
            pressure_diff_mmhg: evaluation.balance.pressure_diff_mmhg,
            score: stability.score,
            max_score: MAX_SCORE,
            score_label: stability.score_label(),
            verdict: stability.verdict,
            verdict_label: stability.verdict.label(locale),
            feedback,
            recommendations,
        }
    }

    /// Recommendations bunched by group, preserving their order.
    pub fn grouped_recommendations(&self) -> Vec<(RecommendationGroup, Vec<&str>)> {
        let mut groups: Vec<(RecommendationGroup, Vec<&str>)> = Vec::new();
        for line in &self.recommendations {
            if let Some((_, texts)) = groups.last_mut().filter(|(group, _)| *group == line.group) {
                texts.push(line.text.as_str());
            } else {
                groups.push((line.group, vec![line.text.as_str()]));
            }
        }
        groups
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
    use crate::evaluator::evaluate;
    use anastomo_common::vessel::Anastomosis;

    #[test]
    fn display_rounding() {
        assert_eq!(format_reynolds(29.07), "29");
        assert_eq!(format_reynolds(1514.6), "1515");
        assert_eq!(format_shear_stress(1.866_666, Locale::En), "1.87 Pa");
        assert_eq!(format_flow(0.090_477, Locale::Ru), "0.09 мл/с");
    }

    #[test]
    fn default_report() {
        let report = Report::new(&evaluate(&Anastomosis::default()), Locale::En);

        assert_eq!(report.score_label, "5/6");
        assert_eq!(report.verdict_label, "✅ Anastomosis is stable");
        assert_eq!(report.segments.len(), 3);

        let donor = &report.segments[0];
        assert_eq!(donor.name, "Donor artery");
        assert_eq!(donor.flow_label, "🟢 Laminar");
        assert_eq!(donor.reynolds_display, "29");
        assert_eq!(donor.shear_stress_display, "1.87 Pa");
        assert_eq!(donor.volumetric_flow_display, "0.09 mL/s");

        let outflow = &report.segments[2];
        assert_eq!(outflow.shear_stress_display, "3.50 Pa");
        assert_eq!(outflow.volumetric_flow_display, "0.17 mL/s");
        assert!((outflow.shear_stress_gauge - 0.7).abs() < 1e-9);

        assert_eq!(report.feedback.len(), 4);
        assert_eq!(report.feedback[3].name, "Pressure balance");
        assert_eq!(report.feedback[3].text, "⚠️ Moderate pressure difference");
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn groups_recommendations_in_order() {
        let anastomosis = Anastomosis::new(
            VesselReading::new(5.0, 1.0, 200.0),
            VesselReading::new(5.0, 1.0, 10.0),
            VesselReading::new(5.0, 1.0, 100.0),
        );
        let report = Report::new(&evaluate(&anastomosis), Locale::En);
        let grouped = report.grouped_recommendations();

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, RecommendationGroup::ShearOptimization);
        assert_eq!(grouped[0].1.len(), 1);
        assert_eq!(grouped[1].0, RecommendationGroup::Balance);
        assert_eq!(grouped[1].1.len(), 2);
        assert_eq!(report.verdict, Verdict::HighRisk);
        assert_eq!(report.score, 2);
    }
}
