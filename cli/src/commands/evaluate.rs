use anastomo_common::config::{Config, OutputFormat};
use anastomo_common::locale::Locale;
use anastomo_common::vessel::Anastomosis;
use anastomo_common::{error, success, warn};
use anastomo_core::hemodynamics::FlowClass;
use anastomo_core::report::{Report, SegmentReport};
use anastomo_core::stability::{SHEAR_ACCEPTABLE_BAND, Verdict};
use anastomo_core::{Evaluation, evaluate as run_evaluation};
use colored::*;

use crate::mprint;
use crate::terminal::{colors, format, gauge, print};

pub fn evaluate(anastomosis: &Anastomosis, cfg: &Config) -> anyhow::Result<()> {
    let evaluation: Evaluation = run_evaluation(anastomosis);
    let report: Report = Report::new(&evaluation, cfg.locale);

    if cfg.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if cfg.quiet >= 2 {
        print_summary(&report, cfg);
        return Ok(());
    }

    print::banner(cfg.no_banner, cfg.quiet);
    print_segments(&report, cfg);
    if cfg.quiet == 0 {
        print_gauges(&report, cfg)?;
    }
    print_assessment(&report, cfg);
    print_recommendations(&report, cfg);
    print_summary(&report, cfg);
    Ok(())
}

fn print_segments(report: &Report, cfg: &Config) {
    let locale = cfg.locale;
    print::header(locale.pick("Analysis results", "Результаты анализа"), cfg.quiet);

    for (idx, segment) in report.segments.iter().enumerate() {
        print_segment_tree(segment, idx, locale);
        if idx + 1 != report.segments.len() {
            mprint!();
        }
    }
}

fn print_segment_tree(segment: &SegmentReport, idx: usize, locale: Locale) {
    print::tree_head(idx, &segment.name);
    let mut details = format::reading_details(segment, locale);
    details.extend(format::metric_details(segment, locale));
    print::as_tree_one_level(details);
}

fn print_gauges(report: &Report, cfg: &Config) -> anyhow::Result<()> {
    let locale = cfg.locale;

    print::header(locale.pick("Reynolds numbers", "Числа Рейнольдса"), cfg.quiet);
    for segment in &report.segments {
        let color = match segment.flow_class {
            FlowClass::Laminar => "green",
            FlowClass::Transitional => "yellow",
            FlowClass::Turbulent => "red",
        };
        gauge::draw(
            segment.segment.short_name(locale),
            segment.reynolds_gauge,
            &segment.reynolds_display,
            color,
        )?;
    }

    print::header(locale.pick("Shear stress", "Напряжения сдвига"), cfg.quiet);
    let (low, high) = SHEAR_ACCEPTABLE_BAND;
    for segment in &report.segments {
        let in_band = low < segment.shear_stress_pa && segment.shear_stress_pa < high;
        gauge::draw(
            segment.segment.short_name(locale),
            segment.shear_stress_gauge,
            &segment.shear_stress_display,
            if in_band { "cyan" } else { "red" },
        )?;
    }
    Ok(())
}

fn print_assessment(report: &Report, cfg: &Config) {
    let locale = cfg.locale;
    mprint!();
    print::header(
        locale.pick("Stability assessment", "Оценка стабильности анастомоза"),
        cfg.quiet,
    );

    let score_key = locale.pick("Stability score", "Оценка стабильности");
    let verdict_key = locale.pick("Verdict", "Заключение");
    let flow_key = locale.pick("Flow balance error", "Дисбаланс потоков");
    let pressure_key = locale.pick("Pressure difference", "Разница давлений");
    print::set_key_width([score_key, verdict_key, flow_key, pressure_key]);

    let verdict_color = colors::verdict(report.verdict);
    print::aligned_line(score_key, report.score_label.color(verdict_color).bold());
    print::aligned_line(verdict_key, report.verdict_label.color(verdict_color));
    print::aligned_line(flow_key, format!("{:.2} %", report.flow_balance_error_pct));
    print::aligned_line(
        pressure_key,
        format!(
            "{:.1} {}",
            report.pressure_diff_mmhg,
            locale.pick("mmHg", "мм рт.ст.")
        ),
    );

    mprint!();
    for line in &report.feedback {
        print::print_status(format::feedback_line(line).to_string());
    }
}

fn print_recommendations(report: &Report, cfg: &Config) {
    let locale = cfg.locale;
    mprint!();
    print::header(locale.pick("Recommendations", "Рекомендации"), cfg.quiet);

    let grouped = report.grouped_recommendations();
    if grouped.is_empty() {
        print::print_status(
            locale
                .pick("No corrective action suggested", "Коррекция не требуется")
                .color(colors::GOOD)
                .to_string(),
        );
        return;
    }

    for (group, texts) in grouped {
        if let Some(heading) = group.heading(locale) {
            print::print(&format!("{}", heading.bold()));
        }
        for text in texts {
            print::print(&format!(" {} {}", "-".color(colors::SEPARATOR), text));
        }
    }
}

fn print_summary(report: &Report, cfg: &Config) {
    let summary = format!(
        "{} {} · {}",
        cfg.locale.pick("Score", "Оценка"),
        report.score_label,
        report.verdict_label
    );

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&format!("{}", summary.color(colors::verdict(report.verdict)).bold()));
            print::end_of_program();
        }
        _ => match report.verdict {
            Verdict::Stable => success!("{}", summary),
            Verdict::NeedsObservation => warn!("{}", summary),
            Verdict::HighRisk => error!("{}", summary),
        },
    }
}
