//! # Stability Scoring
//!
//! An ordinal 0-6 heuristic assembled from four independent criteria, each
//! graded as optimal, acceptable or critical. The score is not a physiological
//! model; thresholds and tie behaviour are fixed.
//!
//! | criterion        | optimal           | acceptable        | points  |
//! |------------------|-------------------|-------------------|---------|
//! | flow regime      | all Re < 2000     | all Re < 4000     | 2 / 1   |
//! | shear stress     | all τ in (1.5, 2.5) | all τ in (0.5, 4.0) | 2 / 1 |
//! | flow balance     | error < 5 %       | error < 10 %      | 1 / 1   |
//! | pressure balance | Δp < 5 mmHg       | Δp < 10 mmHg      | 1 / 1   |
//!
//! The balance criteria award the same single point for both passing tiers;
//! only the feedback text tells them apart.

use anastomo_common::locale::Locale;
use serde::Serialize;

use crate::balance::BalanceChecks;
use crate::hemodynamics::{FlowMetrics, LAMINAR_LIMIT, TURBULENT_THRESHOLD};

/// Open interval of shear stress considered ideal, Pa.
pub const SHEAR_IDEAL_BAND: (f64, f64) = (1.5, 2.5);
/// Open interval of shear stress considered acceptable, Pa.
pub const SHEAR_ACCEPTABLE_BAND: (f64, f64) = (0.5, 4.0);

pub const FLOW_BALANCE_OPTIMAL_PCT: f64 = 5.0;
pub const FLOW_BALANCE_LIMIT_PCT: f64 = 10.0;

pub const PRESSURE_OPTIMAL_MMHG: f64 = 5.0;
pub const PRESSURE_LIMIT_MMHG: f64 = 10.0;

pub const MAX_SCORE: u8 = 6;
pub const STABLE_SCORE: u8 = 5;
pub const OBSERVATION_SCORE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    FlowRegime,
    ShearStress,
    FlowBalance,
    PressureBalance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Optimal,
    Acceptable,
    Critical,
}

impl Grade {
    pub fn tag(self) -> &'static str {
        match self {
            Grade::Optimal => "✅",
            Grade::Acceptable => "⚠️",
            Grade::Critical => "❌",
        }
    }
}

impl Criterion {
    /// Order in which criteria are scored and reported.
    pub const ALL: [Criterion; 4] = [
        Criterion::FlowRegime,
        Criterion::ShearStress,
        Criterion::FlowBalance,
        Criterion::PressureBalance,
    ];

    pub fn points(self, grade: Grade) -> u8 {
        match (self, grade) {
            (_, Grade::Critical) => 0,
            (Criterion::FlowRegime | Criterion::ShearStress, Grade::Optimal) => 2,
            (Criterion::FlowRegime | Criterion::ShearStress, Grade::Acceptable) => 1,
            (Criterion::FlowBalance | Criterion::PressureBalance, _) => 1,
        }
    }

    pub fn max_points(self) -> u8 {
        self.points(Grade::Optimal)
    }

    pub fn name(self, locale: Locale) -> &'static str {
        match self {
            Criterion::FlowRegime => locale.pick("Flow regime", "Тип потока"),
            Criterion::ShearStress => locale.pick("Shear stress", "Напряжение сдвига"),
            Criterion::FlowBalance => locale.pick("Flow balance", "Баланс потоков"),
            Criterion::PressureBalance => locale.pick("Pressure balance", "Баланс давлений"),
        }
    }

    pub fn description(self, grade: Grade, locale: Locale) -> &'static str {
        use Criterion::*;
        use Grade::*;

        match (self, grade) {
            (FlowRegime, Optimal) => locale.pick("All flows are laminar", "Все потоки ламинарные"),
            (FlowRegime, Acceptable) => {
                locale.pick("Flows are in the transitional zone", "Потоки в переходной зоне")
            }
            (FlowRegime, Critical) => locale.pick("Turbulence detected", "Обнаружена турбулентность"),

            (ShearStress, Optimal) => {
                locale.pick("Shear stress is within normal range", "Напряжения сдвига в норме")
            }
            (ShearStress, Acceptable) => locale.pick(
                "Shear stress is close to the limits of normal",
                "Напряжения сдвига близки к границам нормы",
            ),
            (ShearStress, Critical) => {
                locale.pick("Critical shear stress", "Критическое напряжение сдвига")
            }

            (FlowBalance, Optimal) => locale.pick("Excellent flow balance", "Отличный баланс потоков"),
            (FlowBalance, Acceptable) => {
                locale.pick("Moderate flow imbalance", "Умеренный дисбаланс потоков")
            }
            (FlowBalance, Critical) => {
                locale.pick("Significant flow imbalance", "Значительный дисбаланс потоков")
            }

            (PressureBalance, Optimal) => {
                locale.pick("Ideal pressure balance", "Идеальный баланс давлений")
            }
            (PressureBalance, Acceptable) => {
                locale.pick("Moderate pressure difference", "Умеренная разница давлений")
            }
            (PressureBalance, Critical) => {
                locale.pick("Large pressure difference", "Большая разница давлений")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CriterionOutcome {
    pub criterion: Criterion,
    pub grade: Grade,
    pub points: u8,
}

impl CriterionOutcome {
    pub fn new(criterion: Criterion, grade: Grade) -> Self {
        Self {
            criterion,
            grade,
            points: criterion.points(grade),
        }
    }

    /// Tagged feedback line, e.g. `✅ All flows are laminar`.
    pub fn feedback(&self, locale: Locale) -> String {
        format!(
            "{} {}",
            self.grade.tag(),
            self.criterion.description(self.grade, locale)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Stable,
    NeedsObservation,
    HighRisk,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        if score >= STABLE_SCORE {
            Verdict::Stable
        } else if score >= OBSERVATION_SCORE {
            Verdict::NeedsObservation
        } else {
            Verdict::HighRisk
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Verdict::Stable => Grade::Optimal.tag(),
            Verdict::NeedsObservation => Grade::Acceptable.tag(),
            Verdict::HighRisk => Grade::Critical.tag(),
        }
    }

    pub fn text(self, locale: Locale) -> &'static str {
        match self {
            Verdict::Stable => locale.pick("Anastomosis is stable", "Анастомоз стабилен"),
            Verdict::NeedsObservation => locale.pick(
                "Anastomosis requires observation",
                "Анастомоз требует наблюдения",
            ),
            Verdict::HighRisk => locale.pick(
                "High risk of anastomosis closure",
                "Высокий риск закрытия анастомоза",
            ),
        }
    }

    pub fn label(self, locale: Locale) -> String {
        format!("{} {}", self.tag(), self.text(locale))
    }
}

fn within_open(value: f64, (low, high): (f64, f64)) -> bool {
    low < value && value < high
}

pub fn grade_flow_regime(reynolds: &[f64]) -> Grade {
    if reynolds.iter().all(|re| *re < LAMINAR_LIMIT) {
        Grade::Optimal
    } else if reynolds.iter().all(|re| *re < TURBULENT_THRESHOLD) {
        Grade::Acceptable
    } else {
        Grade::Critical
    }
}

pub fn grade_shear_stress(shear_stress_pa: &[f64]) -> Grade {
    if shear_stress_pa.iter().all(|tau| within_open(*tau, SHEAR_IDEAL_BAND)) {
        Grade::Optimal
    } else if shear_stress_pa
        .iter()
        .all(|tau| within_open(*tau, SHEAR_ACCEPTABLE_BAND))
    {
        Grade::Acceptable
    } else {
        Grade::Critical
    }
}

pub fn grade_flow_balance(error_pct: f64) -> Grade {
    if error_pct < FLOW_BALANCE_OPTIMAL_PCT {
        Grade::Optimal
    } else if error_pct < FLOW_BALANCE_LIMIT_PCT {
        Grade::Acceptable
    } else {
        Grade::Critical
    }
}

pub fn grade_pressure_balance(diff_mmhg: f64) -> Grade {
    if diff_mmhg < PRESSURE_OPTIMAL_MMHG {
        Grade::Optimal
    } else if diff_mmhg < PRESSURE_LIMIT_MMHG {
        Grade::Acceptable
    } else {
        Grade::Critical
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StabilityAssessment {
    pub score: u8,
    pub verdict: Verdict,
    /// One outcome per criterion, in [`Criterion::ALL`] order.
    pub outcomes: [CriterionOutcome; 4],
}

impl StabilityAssessment {
    pub fn assess(metrics: &[FlowMetrics], balance: &BalanceChecks) -> Self {
        let reynolds: Vec<f64> = metrics.iter().map(|m| m.reynolds).collect();
        let shear: Vec<f64> = metrics.iter().map(|m| m.shear_stress_pa).collect();

        let outcomes = [
            CriterionOutcome::new(Criterion::FlowRegime, grade_flow_regime(&reynolds)),
            CriterionOutcome::new(Criterion::ShearStress, grade_shear_stress(&shear)),
            CriterionOutcome::new(
                Criterion::FlowBalance,
                grade_flow_balance(balance.flow_balance_error_pct),
            ),
            CriterionOutcome::new(
                Criterion::PressureBalance,
                grade_pressure_balance(balance.pressure_diff_mmhg),
            ),
        ];

        let score: u8 = outcomes.iter().map(|o| o.points).sum();
        Self {
            score,
            verdict: Verdict::from_score(score),
            outcomes,
        }
    }

    pub fn outcome(&self, criterion: Criterion) -> &CriterionOutcome {
        // outcomes are built in Criterion::ALL order
        &self.outcomes[criterion as usize]
    }

    pub fn feedback(&self, locale: Locale) -> Vec<String> {
        self.outcomes.iter().map(|o| o.feedback(locale)).collect()
    }

    /// Score as `X/6`.
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.score, MAX_SCORE)
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
