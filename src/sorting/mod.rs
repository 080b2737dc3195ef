// Sorting core
//
// Two interchangeable bubble sort variants plus the statistics they collect:
// - Basic: single-direction passes with early exit
// - Bidirectional: cocktail shaker rounds
//
// Usage:
//   let mut sorter = Sorter::new();
//   let (sorted, stats) = sorter.sort_basic(Some(&[3, 1, 2]));

pub mod algorithms;
pub mod reporter;
pub mod sorter;
pub mod stats;
pub mod timer;
pub mod trace;

pub use algorithms::{bubble_sort, cocktail_shaker_sort};
pub use reporter::{format_statistics, render_statistics, ConsoleTrace, OutputFormat, Reporter, RunRecord};
pub use sorter::Sorter;
pub use stats::SortStatistics;
pub use trace::{NoTrace, SwapEvent, SwapObserver, SwapRecorder};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Basic,
    Bidirectional,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Basic, Algorithm::Bidirectional];

    pub fn name(&self) -> &str {
        match self {
            Algorithm::Basic => "Basic bubble sort",
            Algorithm::Bidirectional => "Bidirectional bubble sort",
        }
    }

    /// Short identifier, as serialized
    pub fn key(&self) -> &str {
        match self {
            Algorithm::Basic => "basic",
            Algorithm::Bidirectional => "bidirectional",
        }
    }

    /// What `count` units of `SortStatistics::iterations` are called for this algorithm
    pub fn iteration_unit(&self, count: usize) -> &str {
        match (self, count) {
            (Algorithm::Basic, 1) => "pass",
            (Algorithm::Basic, _) => "passes",
            (Algorithm::Bidirectional, 1) => "round",
            (Algorithm::Bidirectional, _) => "rounds",
        }
    }

    pub fn run<T, O>(&self, input: &[T], observer: &mut O) -> (Vec<T>, SortStatistics)
    where
        T: Ord + Clone,
        O: SwapObserver<T> + ?Sized,
    {
        match self {
            Algorithm::Basic => bubble_sort(input, observer),
            Algorithm::Bidirectional => cocktail_shaker_sort(input, observer),
        }
    }
}
