pub mod evaluate;
pub mod info;

use anastomo_common::bounds::{DIAMETER_MM, PRESSURE_MMHG, VELOCITY_CM_S};
use anastomo_common::config::{Config, OutputFormat};
use anastomo_common::error::InputError;
use anastomo_common::locale::Locale;
use anastomo_common::vessel::{Anastomosis, VesselReading};
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "anastomo", version)]
#[command(about = "Hemodynamic stability analyzer for vascular anastomoses.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output; repeat for a one-line summary
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show diagnostic logs; repeat for trace output
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Do not print the title banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Language of the output (en, ru)
    #[arg(long, value_name = "LANG", default_value = "en", global = true)]
    pub lang: Locale,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate flow stability for donor, acceptor and outflow readings
    #[command(alias = "e")]
    Evaluate(ReadingArgs),
    /// Show the model constants and scoring thresholds
    #[command(alias = "i")]
    Info,
}

#[derive(Args, Debug, Clone)]
pub struct ReadingArgs {
    /// Donor artery diameter [0.1-5 mm]
    #[arg(long, value_name = "MM", default_value_t = 1.2, value_parser = diameter)]
    pub donor_diameter: f64,
    /// Donor artery velocity [1-100 cm/s]
    #[arg(long, value_name = "CM_S", default_value_t = 8.0, value_parser = velocity)]
    pub donor_velocity: f64,
    /// Donor artery pressure [10-200 mmHg]
    #[arg(long, value_name = "MMHG", default_value_t = 80.0, value_parser = pressure)]
    pub donor_pressure: f64,

    /// Acceptor artery diameter [0.1-5 mm]
    #[arg(long, value_name = "MM", default_value_t = 1.0, value_parser = diameter)]
    pub acceptor_diameter: f64,
    /// Acceptor artery velocity [1-100 cm/s]
    #[arg(long, value_name = "CM_S", default_value_t = 10.0, value_parser = velocity)]
    pub acceptor_velocity: f64,
    /// Acceptor artery pressure [10-200 mmHg]
    #[arg(long, value_name = "MMHG", default_value_t = 75.0, value_parser = pressure)]
    pub acceptor_pressure: f64,

    /// Outflow artery diameter [0.1-5 mm]
    #[arg(long, value_name = "MM", default_value_t = 1.2, value_parser = diameter)]
    pub outflow_diameter: f64,
    /// Outflow artery velocity [1-100 cm/s]
    #[arg(long, value_name = "CM_S", default_value_t = 15.0, value_parser = velocity)]
    pub outflow_velocity: f64,
    /// Outflow artery pressure [10-200 mmHg]
    #[arg(long, value_name = "MMHG", default_value_t = 78.0, value_parser = pressure)]
    pub outflow_pressure: f64,
}

fn diameter(s: &str) -> Result<f64, InputError> {
    DIAMETER_MM.parse(s)
}

fn velocity(s: &str) -> Result<f64, InputError> {
    VELOCITY_CM_S.parse(s)
}

fn pressure(s: &str) -> Result<f64, InputError> {
    PRESSURE_MMHG.parse(s)
}

impl ReadingArgs {
    pub fn anastomosis(&self) -> Anastomosis {
        Anastomosis::new(
            VesselReading::new(self.donor_diameter, self.donor_velocity, self.donor_pressure),
            VesselReading::new(
                self.acceptor_diameter,
                self.acceptor_velocity,
                self.acceptor_pressure,
            ),
            VesselReading::new(
                self.outflow_diameter,
                self.outflow_velocity,
                self.outflow_pressure,
            ),
        )
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            locale: self.lang,
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
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
