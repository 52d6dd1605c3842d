use anastomo_common::bounds::{Bounds, DIAMETER_MM, PRESSURE_MMHG, VELOCITY_CM_S};
use anastomo_common::config::{Config, OutputFormat};
use anastomo_core::balance::MAX_IMBALANCE_PCT;
use anastomo_core::gauge::{REYNOLDS_FULL_SCALE, SHEAR_FULL_SCALE_PA};
use anastomo_core::hemodynamics::{
    BLOOD_DENSITY, BLOOD_VISCOSITY, LAMINAR_LIMIT, TURBULENT_THRESHOLD,
};
use anastomo_core::stability::{
    FLOW_BALANCE_LIMIT_PCT, FLOW_BALANCE_OPTIMAL_PCT, MAX_SCORE, OBSERVATION_SCORE,
    PRESSURE_LIMIT_MMHG, PRESSURE_OPTIMAL_MMHG, SHEAR_ACCEPTABLE_BAND, SHEAR_IDEAL_BAND,
    STABLE_SCORE,
};
use serde_json::json;

use crate::mprint;
use crate::terminal::print;

fn bounds_json(bounds: &Bounds) -> serde_json::Value {
    json!({ "min": bounds.min, "max": bounds.max, "unit": bounds.quantity.unit() })
}

fn bounds_text(bounds: &Bounds) -> String {
    format!("{} - {} {}", bounds.min, bounds.max, bounds.quantity.unit())
}

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    if cfg.format == OutputFormat::Json {
        let value = json!({
            "blood_density_kg_m3": BLOOD_DENSITY,
            "blood_viscosity_pa_s": BLOOD_VISCOSITY,
            "laminar_limit": LAMINAR_LIMIT,
            "turbulent_threshold": TURBULENT_THRESHOLD,
            "shear_ideal_band_pa": [SHEAR_IDEAL_BAND.0, SHEAR_IDEAL_BAND.1],
            "shear_acceptable_band_pa": [SHEAR_ACCEPTABLE_BAND.0, SHEAR_ACCEPTABLE_BAND.1],
            "flow_balance_optimal_pct": FLOW_BALANCE_OPTIMAL_PCT,
            "flow_balance_limit_pct": FLOW_BALANCE_LIMIT_PCT,
            "zero_outflow_imbalance_pct": MAX_IMBALANCE_PCT,
            "pressure_optimal_mmhg": PRESSURE_OPTIMAL_MMHG,
            "pressure_limit_mmhg": PRESSURE_LIMIT_MMHG,
            "max_score": MAX_SCORE,
            "stable_score": STABLE_SCORE,
            "observation_score": OBSERVATION_SCORE,
            "reynolds_gauge_full_scale": REYNOLDS_FULL_SCALE,
            "shear_gauge_full_scale_pa": SHEAR_FULL_SCALE_PA,
            "input_bounds": {
                "diameter": bounds_json(&DIAMETER_MM),
                "velocity": bounds_json(&VELOCITY_CM_S),
                "pressure": bounds_json(&PRESSURE_MMHG),
            },
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let locale = cfg.locale;
    print::banner(cfg.no_banner, cfg.quiet);

    let model: Vec<(&str, String)> = vec![
        (
            locale.pick("Blood density", "Плотность крови"),
            format!("{BLOOD_DENSITY} kg/m³"),
        ),
        (
            locale.pick("Blood viscosity", "Вязкость крови"),
            format!("{BLOOD_VISCOSITY} Pa·s"),
        ),
        (
            locale.pick("Laminar below", "Ламинарный поток ниже"),
            format!("Re {LAMINAR_LIMIT}"),
        ),
        (
            locale.pick("Turbulent from", "Турбулентный поток от"),
            format!("Re {TURBULENT_THRESHOLD}"),
        ),
    ];

    let scoring: Vec<(&str, String)> = vec![
        (
            locale.pick("Ideal shear", "Оптимальный сдвиг"),
            format!("({}, {}) Pa", SHEAR_IDEAL_BAND.0, SHEAR_IDEAL_BAND.1),
        ),
        (
            locale.pick("Acceptable shear", "Допустимый сдвиг"),
            format!("({}, {}) Pa", SHEAR_ACCEPTABLE_BAND.0, SHEAR_ACCEPTABLE_BAND.1),
        ),
        (
            locale.pick("Flow balance", "Баланс потоков"),
            format!("< {FLOW_BALANCE_OPTIMAL_PCT} % / < {FLOW_BALANCE_LIMIT_PCT} %"),
        ),
        (
            locale.pick("Pressure balance", "Баланс давлений"),
            format!("< {PRESSURE_OPTIMAL_MMHG} / < {PRESSURE_LIMIT_MMHG} mmHg"),
        ),
        (
            locale.pick("Stable from", "Стабилен от"),
            format!("{STABLE_SCORE}/{MAX_SCORE}"),
        ),
        (
            locale.pick("Observation from", "Наблюдение от"),
            format!("{OBSERVATION_SCORE}/{MAX_SCORE}"),
        ),
    ];

    let inputs: Vec<(&str, String)> = vec![
        (locale.pick("Diameter", "Диаметр"), bounds_text(&DIAMETER_MM)),
        (locale.pick("Velocity", "Скорость"), bounds_text(&VELOCITY_CM_S)),
        (locale.pick("Pressure", "Давление"), bounds_text(&PRESSURE_MMHG)),
    ];

    print::set_key_width(
        model
            .iter()
            .chain(&scoring)
            .chain(&inputs)
            .map(|(key, _)| *key),
    );

    let sections = [
        (locale.pick("Flow model", "Модель потока"), model),
        (locale.pick("Scoring", "Оценка"), scoring),
        (locale.pick("Input ranges", "Диапазоны ввода"), inputs),
    ];

    for (idx, (title, lines)) in sections.into_iter().enumerate() {
        if idx > 0 {
            mprint!();
        }
        print::header(title, cfg.quiet);
        for (key, value) in lines {
            print::aligned_line(key, value);
        }
    }

    Ok(())
}
