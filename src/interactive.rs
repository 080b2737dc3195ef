// File: src/interactive.rs
//
// Interactive mode: read one line of whitespace-separated integers,
// sort it with per-swap tracing and print the statistics.
// Bad input is reported and nothing is sorted; Ctrl+C / Ctrl+D leave quietly.

use crate::errors::InputError;
use crate::input::parse_sequence;
use crate::sorting::{ConsoleTrace, Reporter, Sorter};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// What happened to the line the user typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sorted(Vec<i64>),
    Rejected(InputError),
    Interrupted,
}

pub struct InteractiveSession {
    editor: DefaultEditor,
}

impl InteractiveSession {
    pub fn new() -> Result<Self, ReadlineError> {
        let editor = DefaultEditor::new()?;
        Ok(InteractiveSession { editor })
    }

    fn show_banner(&self) {
        println!();
        println!("{}", "Interactive Bubble Sort".bright_cyan().bold());
        println!(
            "  {} Enter numbers separated by spaces (e.g. {})",
            "Tip:".bright_magenta(),
            "64 34 25 12 22 11 90".bright_yellow()
        );
        println!("  {} Ctrl+C or Ctrl+D to leave", "Tip:".bright_magenta());
        println!();
    }

    /// Prompt once and handle the answer
    pub fn run(&mut self) -> Result<Outcome, ReadlineError> {
        self.show_banner();

        let prompt = "numbers> ".bright_green().to_string();
        match self.editor.readline(&prompt) {
            Ok(line) => Ok(sort_line(&line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "\nInterrupted by user. Goodbye!".bright_cyan());
                Ok(Outcome::Interrupted)
            }
            Err(err) => Err(err),
        }
    }
}

/// Parse `line`, then trace-sort it. Input errors are printed, not returned.
pub fn sort_line(line: &str) -> Outcome {
    let values = match parse_sequence(line) {
        Ok(values) => values,
        Err(err) => {
            eprintln!("{}", err.render());
            return Outcome::Rejected(err);
        }
    };

    let mut sorter = Sorter::with_data(values);
    println!();
    Reporter::print_sequence("Original", sorter.data());
    Reporter::print_separator();

    let (sorted, stats) = sorter.sort_basic_traced(None, &mut ConsoleTrace);
    Reporter::print_sequence("Sorted", &sorted);
    Reporter::print_statistics(&stats);

    let (_, bidirectional) = sorter.sort_bidirectional(None);
    Reporter::print_comparison(&stats, &bidirectional);

    Outcome::Sorted(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_line_sorts() {
        assert_eq!(sort_line("3 1 2"), Outcome::Sorted(vec![1, 2, 3]));
    }

    #[test]
    fn test_sort_line_rejects_empty() {
        assert_eq!(sort_line("   "), Outcome::Rejected(InputError::Empty));
    }

    #[test]
    fn test_sort_line_rejects_non_integer() {
        assert_eq!(
            sort_line("4 four"),
            Outcome::Rejected(InputError::InvalidInteger { token: "four".to_string(), position: 2 })
        );
    }
}
