mod commands;
mod terminal;

use commands::{CommandLine, Commands, evaluate, info};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = commands.config();

    match commands.command {
        Commands::Evaluate(readings) => evaluate::evaluate(&readings.anastomosis(), &cfg),
        Commands::Info => info::info(&cfg),
    }
}
