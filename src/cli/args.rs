use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "coffee-curve", version, author, about = "Your daily energy curve, one coffee at a time")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Which scenario to compute. Falls back to config values.
#[derive(Args, Debug, Clone, Default)]
pub struct ScenarioArgs {
    /// Coffees drunk today (0-5)
    #[arg(long, short = 'c', allow_negative_numbers = true)]
    pub coffees: Option<i64>,
    /// Energy model: slider or two-shot
    #[arg(long, short = 'p')]
    pub preset: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the hour-by-hour energy table
    Curve {
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Emit the rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show peak, minimum and mean energy
    Stats {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
    /// List the coffee moments
    Moments {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
    /// Print the verdict for the day
    Verdict {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
    /// Export a plain-text summary to stdout
    Export {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
    /// Show the configuration file and its values
    Config {
        /// Overwrite the configuration with defaults
        #[arg(long)]
        reset: bool,
    },
}
