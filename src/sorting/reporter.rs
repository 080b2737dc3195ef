// Results formatting and console output

use crate::sorting::trace::{SwapEvent, SwapObserver};
use crate::sorting::{Algorithm, SortStatistics};
use colored::*;
use serde::Serialize;
use std::fmt::Debug;

const RULE_WIDTH: usize = 60;
const TRACE_RULE_WIDTH: usize = 50;

/// Plain-text statistics block, one field per line
pub fn format_statistics(stats: &SortStatistics) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str("Sort Statistics\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("Comparisons: {}\n", stats.comparisons));
    out.push_str(&format!("Swaps: {}\n", stats.swaps));
    out.push_str(&format!("Execution time: {:.6} s\n", stats.execution_secs()));
    out.push_str(&format!("Iterations: {}\n", stats.iterations));
    out.push_str(&rule);
    out
}

/// `format_statistics` with colors: rules blue, title bold, values highlighted
pub fn render_statistics(stats: &SortStatistics) -> String {
    format_statistics(stats)
        .lines()
        .map(|line| {
            if line.starts_with('=') {
                line.bright_blue().to_string()
            } else if let Some((label, value)) = line.split_once(": ") {
                format!("{}: {}", label, value.yellow())
            } else {
                line.bright_white().bold().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// How many passes/rounds each algorithm needed, and which needed fewer
pub fn comparison_summary(basic: &SortStatistics, bidirectional: &SortStatistics) -> String {
    let verdict = if bidirectional.iterations < basic.iterations {
        "bidirectional finished in fewer iterations"
    } else if bidirectional.iterations == basic.iterations {
        "same number of iterations"
    } else {
        "basic finished in fewer iterations"
    };
    format!(
        "{} {}, {} {} ({})",
        basic.iterations,
        Algorithm::Basic.iteration_unit(basic.iterations),
        bidirectional.iterations,
        Algorithm::Bidirectional.iteration_unit(bidirectional.iterations),
        verdict
    )
}

pub fn format_sequence<T: Debug>(items: &[T]) -> String {
    format!("{:?}", items)
}

/// The two trace lines printed for one exchange, without the trailing rule
pub fn format_swap<T: Debug>(event: &SwapEvent<'_, T>) -> String {
    format!(
        "Swap: {:?} <-> {:?} in pass {}\nCurrent: {}",
        event.larger,
        event.smaller,
        event.pass,
        format_sequence(event.sequence)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One algorithm run, in the shape emitted by `--json`
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord<T> {
    pub algorithm: Algorithm,
    pub input: Vec<T>,
    pub output: Vec<T>,
    pub statistics: SortStatistics,
}

impl<T: Clone> RunRecord<T> {
    pub fn new(algorithm: Algorithm, input: &[T], output: Vec<T>, statistics: SortStatistics) -> Self {
        Self { algorithm, input: input.to_vec(), output, statistics }
    }
}

pub fn records_to_json<T: Serialize>(records: &[RunRecord<T>]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

pub struct Reporter;

impl Reporter {
    pub fn print_header(title: &str) {
        println!("{}", "=".repeat(RULE_WIDTH).bright_blue());
        println!("{:^width$}", title.bright_white().bold(), width = RULE_WIDTH);
        println!("{}", "=".repeat(RULE_WIDTH).bright_blue());
    }

    pub fn print_separator() {
        println!("{}", "-".repeat(TRACE_RULE_WIDTH).blue());
    }

    pub fn print_sequence<T: Debug>(label: &str, items: &[T]) {
        println!("{} {}", format!("{}:", label).bright_white(), format_sequence(items).yellow());
    }

    pub fn print_statistics(stats: &SortStatistics) {
        println!("{}", render_statistics(stats));
    }

    pub fn print_result<T: Debug>(algorithm: Algorithm, sorted: &[T], stats: &SortStatistics) {
        println!("{} {}", "✓".green().bold(), algorithm.name().bright_white());
        Self::print_sequence("Result", sorted);
        Self::print_statistics(stats);
    }

    pub fn print_comparison(basic: &SortStatistics, bidirectional: &SortStatistics) {
        println!("{} {}", "Compare:".bright_cyan().bold(), comparison_summary(basic, bidirectional));
    }
}

/// Prints each exchange as it happens
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleTrace;

impl<T: Debug> SwapObserver<T> for ConsoleTrace {
    fn on_swap(&mut self, event: SwapEvent<'_, T>) {
        println!("{}", format_swap(&event).bright_white());
        Reporter::print_separator();
    }
}
