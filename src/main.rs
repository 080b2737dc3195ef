// File: src/main.rs
//
// Main entry point for bubblesort.
// Parses the command line and dispatches to the demo, interactive or random
// mode. Without a mode it prints usage and sorts a built-in example.

use bubblesort::errors::InputError;
use bubblesort::interactive::InteractiveSession;
use bubblesort::modes;
use bubblesort::sorting::{Algorithm, OutputFormat};
use clap::{CommandFactory, Parser as ClapParser, Subcommand, ValueEnum};
use colored::Colorize;
use std::error::Error;
use std::process;

#[derive(ClapParser)]
#[command(
    name = "bubblesort",
    about = "Bubble sort and cocktail shaker sort with run statistics",
    version = env!("CARGO_PKG_VERSION"),
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Emit run records as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both algorithms over the built-in test cases
    Demo,

    /// Type numbers and watch them being sorted swap by swap
    Interactive,

    /// Sort randomly generated data
    Random {
        /// Number of values to generate
        #[arg(long, default_value_t = 10)]
        size: usize,

        /// Smallest value that may be generated
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        min: i64,

        /// Largest value that may be generated
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        max: i64,

        /// Which algorithm(s) to run
        #[arg(long, value_enum, default_value_t = AlgorithmChoice::Both)]
        algorithm: AlgorithmChoice,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmChoice {
    Basic,
    Bidirectional,
    Both,
}

impl AlgorithmChoice {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Basic => vec![Algorithm::Basic],
            AlgorithmChoice::Bidirectional => vec![Algorithm::Bidirectional],
            AlgorithmChoice::Both => Algorithm::ALL.to_vec(),
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };

    match cli.command {
        Some(Commands::Demo) => modes::run_demo(format),

        Some(Commands::Interactive) => {
            let mut session = InteractiveSession::new()?;
            session.run()?;
            Ok(())
        }

        Some(Commands::Random { size, min, max, algorithm }) => {
            modes::run_random(size, min, max, &algorithm.algorithms(), format)
        }

        None => {
            if format == OutputFormat::Text {
                Cli::command().print_help()?;
            }
            modes::run_example(format)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(err) = run(cli) {
        match err.downcast_ref::<InputError>() {
            Some(input_err) => eprintln!("{}", input_err.render()),
            None => eprintln!("{} {}", "Error:".bright_red().bold(), err),
        }
        process::exit(1);
    }
}
