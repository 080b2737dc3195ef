// File: src/errors.rs
//
// Error types for user-supplied input.
// Sorting itself cannot fail; only parsing typed numbers and generating
// random data from a range can.

use colored::Colorize;
use std::fmt;

/// Types of input errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyInput,
    InvalidInteger,
    InvalidRange,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::EmptyInput => write!(f, "Empty Input"),
            ErrorKind::InvalidInteger => write!(f, "Invalid Integer"),
            ErrorKind::InvalidRange => write!(f, "Invalid Range"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No numbers were entered
    Empty,
    /// A token that is not an integer; `position` is 1-based
    InvalidInteger { token: String, position: usize },
    /// Random data requested from a range whose lower bound exceeds the upper
    InvalidRange { min: i64, max: i64 },
}

impl InputError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InputError::Empty => ErrorKind::EmptyInput,
            InputError::InvalidInteger { .. } => ErrorKind::InvalidInteger,
            InputError::InvalidRange { .. } => ErrorKind::InvalidRange,
        }
    }

    pub fn message(&self) -> String {
        match self {
            InputError::Empty => "input cannot be empty".to_string(),
            InputError::InvalidInteger { token, position } => {
                format!("'{}' (number {}) is not a valid integer", token, position)
            }
            InputError::InvalidRange { min, max } => {
                format!("minimum {} is greater than maximum {}", min, max)
            }
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::Empty | InputError::InvalidInteger { .. } => {
                Some("enter whole numbers separated by spaces, e.g. 64 34 25 12 22 11 90")
            }
            InputError::InvalidRange { .. } => Some("pass --min lower than or equal to --max"),
        }
    }

    /// Colored multi-line rendering for the terminal
    pub fn render(&self) -> String {
        let mut out = format!("{} {}", format!("{}:", self.kind()).red().bold(), self.message().bold());
        if let Some(help) = self.help() {
            out.push_str(&format!("\n   {} {}", "=".bright_yellow(), format!("help: {}", help).bright_yellow()));
        }
        out
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

impl std::error::Error for InputError {}
