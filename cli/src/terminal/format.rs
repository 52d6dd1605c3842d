use anastomo_common::locale::Locale;
use anastomo_core::report::{FeedbackLine, SegmentReport};
use anastomo_core::stability::SHEAR_ACCEPTABLE_BAND;
use colored::*;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

fn shear_color(shear_stress_pa: f64) -> Color {
    let (low, high) = SHEAR_ACCEPTABLE_BAND;
    if low < shear_stress_pa && shear_stress_pa < high {
        colors::VALUE
    } else {
        colors::BAD
    }
}

/// The entered readings of one segment.
pub fn reading_details(segment: &SegmentReport, locale: Locale) -> Vec<Detail> {
    let reading = &segment.reading;
    vec![
        (
            locale.pick("Diameter", "Диаметр").to_string(),
            format!("{:.2} {}", reading.diameter_mm, locale.pick("mm", "мм")).color(colors::VALUE),
        ),
        (
            locale.pick("Velocity", "Скорость").to_string(),
            format!("{:.1} {}", reading.velocity_cm_s, locale.pick("cm/s", "см/с"))
                .color(colors::VALUE),
        ),
        (
            locale.pick("Pressure", "Давление").to_string(),
            format!("{:.1} {}", reading.pressure_mmhg, locale.pick("mmHg", "мм рт.ст."))
                .color(colors::VALUE),
        ),
    ]
}

/// The derived metrics of one segment, colored by how they grade.
pub fn metric_details(segment: &SegmentReport, locale: Locale) -> Vec<Detail> {
    vec![
        (
            locale.pick("Flow type", "Тип потока").to_string(),
            segment
                .flow_label
                .color(colors::flow_class(segment.flow_class))
                .bold(),
        ),
        (
            locale.pick("Reynolds number", "Число Рейнольдса").to_string(),
            segment
                .reynolds_display
                .color(colors::flow_class(segment.flow_class)),
        ),
        (
            locale.pick("Shear stress", "Напряжение сдвига").to_string(),
            segment
                .shear_stress_display
                .color(shear_color(segment.shear_stress_pa)),
        ),
        (
            locale.pick("Volumetric flow", "Объемный расход").to_string(),
            segment.volumetric_flow_display.color(colors::VALUE),
        ),
    ]
}

pub fn feedback_line(line: &FeedbackLine) -> ColoredString {
    line.text.color(colors::grade(line.grade))
}
