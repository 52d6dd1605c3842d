use anastomo_core::hemodynamics::FlowClass;
use anastomo_core::stability::{Grade, Verdict};
use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const VALUE: Color = Color::BrightWhite;

pub const GOOD: Color = Color::Green;
pub const CAUTION: Color = Color::Yellow;
pub const BAD: Color = Color::Red;

pub fn grade(grade: Grade) -> Color {
    match grade {
        Grade::Optimal => GOOD,
        Grade::Acceptable => CAUTION,
        Grade::Critical => BAD,
    }
}

pub fn flow_class(class: FlowClass) -> Color {
    match class {
        FlowClass::Laminar => GOOD,
        FlowClass::Transitional => CAUTION,
        FlowClass::Turbulent => BAD,
    }
}

pub fn verdict(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Stable => GOOD,
        Verdict::NeedsObservation => CAUTION,
        Verdict::HighRisk => BAD,
    }
}
