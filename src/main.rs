use clap::{Parser, Subcommand, ValueEnum};
use nextperiod::prelude::*;
use std::fmt::Write;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Predict(#[from] PredictError),

    #[error("{0}")]
    Date(#[from] DateError),

    #[error("{0}")]
    Cycle(#[from] CycleError),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug, Default)]
enum PolicyArg {
    /// Accept any integer cycle length, including zero and negative
    #[default]
    Lenient,
    /// Require a cycle length of at least one day
    Positive,
    /// Require a cycle length in the textbook 21-35 day range
    Typical,
}

impl PolicyArg {
    fn to_policy(self) -> CyclePolicy {
        match self {
            PolicyArg::Lenient => CyclePolicy::Lenient,
            PolicyArg::Positive => CyclePolicy::Positive,
            PolicyArg::Typical => CyclePolicy::Typical,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
#[command(arg_required_else_help(true))]
enum Commands {
    /// Predicts the start date of the next period
    Next {
        /// The start date of the last period, in `YYYY-MM-DD` format
        start: String,

        /// The average cycle length, in days
        #[arg(short, long, default_value = "28")]
        cycle_length: String,

        /// How strictly to validate the cycle length
        #[arg(short, long, value_enum, default_value_t = PolicyArg::Lenient)]
        policy: PolicyArg,

        /// Print the bare predicted date in `YYYY-MM-DD` format instead of a sentence
        #[arg(long)]
        iso: bool,
    },

    /// Estimates the ovulation day and fertile window
    Ovulation {
        /// The start date of the last period, in `YYYY-MM-DD` format
        start: String,

        /// The average cycle length, in days
        #[arg(short, long, default_value = "28")]
        cycle_length: String,
    },

    /// Prints modeled estrogen and progesterone levels for one cycle day
    Hormones {
        /// The cycle day to report, counting the start date as day 1
        #[arg(short, long)]
        day: u32,

        /// The average cycle length, in days
        #[arg(short, long, default_value = "28")]
        cycle_length: String,
    },

    /// Prints a chart of modeled hormone levels across the whole cycle
    Chart {
        /// The average cycle length, in days
        #[arg(short, long, default_value = "28")]
        cycle_length: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Commands::Next {
            start,
            cycle_length,
            policy,
            iso,
        } => {
            let prediction =
                Predictor::new(policy.to_policy()).predict_str(&start, &cycle_length)?;
            Ok(if iso {
                prediction.date().to_string()
            } else {
                prediction.to_string()
            })
        }
        Commands::Ovulation {
            start,
            cycle_length,
        } => {
            let start: StartDate = start.parse()?;
            let cycle: CycleLength = cycle_length.parse()?;
            let phase = OvulationPhase::for_cycle(cycle)?;
            let window = phase.window();
            let (window_start, window_end) = phase.window_dates(start)?;
            Ok(format!(
                "Estimated ovulation day: day {} ({})\nFertile window: days {}-{} ({} to {})",
                phase.day(),
                phase.date(start)?,
                window.start(),
                window.end(),
                window_start,
                window_end,
            ))
        }
        Commands::Hormones { day, cycle_length } => {
            let cycle: CycleLength = cycle_length.parse()?;
            let levels = HormoneLevels::on_day(day, cycle)?;
            Ok(format!(
                "On day {day} of a {cycle}-day cycle:\n - Estrogen level: {:.2}\n - Progesterone level: {:.2}",
                levels.estrogen, levels.progesterone,
            ))
        }
        Commands::Chart { cycle_length } => {
            let cycle: CycleLength = cycle_length.parse()?;
            let series = HormoneLevels::series(cycle)?;
            Ok(render_chart(&series))
        }
    }
}

/// Renders one row per cycle day, with a bar per hormone scaled so the estrogen peak of 200
/// fills 20 columns and the progesterone peak of 25 fills 12.
fn render_chart(series: &[HormoneLevels]) -> String {
    let mut out = String::new();
    out.push_str("Day | Estrogen       | Progesterone");
    for (i, levels) in series.iter().enumerate() {
        let e_bar = "#".repeat((levels.estrogen / 10.0).round() as usize);
        let p_bar = "#".repeat((levels.progesterone / 2.0).round() as usize);
        let _ = write!(
            out,
            "\n{:>3} | {:>6.2} {:<20} | {:>5.2} {}",
            i + 1,
            levels.estrogen,
            e_bar,
            levels.progesterone,
            p_bar,
        );
    }
    out
}
