use console::Term;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::terminal::print;

const GAUGE_STEPS: u64 = 1000;

/// Draws a static bar for `fraction` (0..=1) labelled with `value`.
///
/// Falls back to a plain line when stdout is not a terminal, since indicatif
/// draws nothing there.
pub fn draw(label: &str, fraction: f64, value: &str, color: &str) -> anyhow::Result<()> {
    if !Term::stdout().is_term() {
        print::print_status(format!("{label}: {value}"));
        return Ok(());
    }

    let template = format!("  {{prefix:<12}} [{{bar:36.{color}/bright_black}}] {{msg}}");
    let style = ProgressStyle::with_template(&template)?.progress_chars("█▓░");

    let bar = ProgressBar::with_draw_target(Some(GAUGE_STEPS), ProgressDrawTarget::stdout());
    bar.set_style(style);
    bar.set_prefix(label.to_string());
    bar.set_message(value.to_string());
    bar.set_position((fraction.clamp(0.0, 1.0) * GAUGE_STEPS as f64).round() as u64);
    bar.abandon();

    Ok(())
}
