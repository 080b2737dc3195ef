// Stateful front end over the sort algorithms

use crate::errors::InputError;
use crate::sorting::trace::{NoTrace, SwapObserver};
use crate::sorting::{Algorithm, SortStatistics};
use rand::Rng;

/// Holds a default data set and remembers the statistics of the last run.
///
/// The statistics returned by each sort call are authoritative;
/// `last_statistics` is only a convenience copy of the most recent one.
/// Each call overwrites it, so a shared `Sorter` must not be used from
/// several callers at once.
#[derive(Debug, Clone)]
pub struct Sorter<T> {
    data: Vec<T>,
    last_run: Option<SortStatistics>,
}

impl<T: Ord + Clone> Sorter<T> {
    pub fn new() -> Self {
        Self { data: Vec::new(), last_run: None }
    }

    pub fn with_data(data: Vec<T>) -> Self {
        Self { data, last_run: None }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
    }

    pub fn last_statistics(&self) -> Option<&SortStatistics> {
        self.last_run.as_ref()
    }

    /// Basic bubble sort over `input`, or over the stored data when `None`
    pub fn sort_basic(&mut self, input: Option<&[T]>) -> (Vec<T>, SortStatistics) {
        self.sort_with(Algorithm::Basic, input, &mut NoTrace)
    }

    /// Basic bubble sort reporting every exchange to `observer`
    pub fn sort_basic_traced<O>(&mut self, input: Option<&[T]>, observer: &mut O) -> (Vec<T>, SortStatistics)
    where
        O: SwapObserver<T> + ?Sized,
    {
        self.sort_with(Algorithm::Basic, input, observer)
    }

    /// Cocktail shaker sort over `input`, or over the stored data when `None`
    pub fn sort_bidirectional(&mut self, input: Option<&[T]>) -> (Vec<T>, SortStatistics) {
        self.sort_with(Algorithm::Bidirectional, input, &mut NoTrace)
    }

    pub fn sort_with<O>(
        &mut self,
        algorithm: Algorithm,
        input: Option<&[T]>,
        observer: &mut O,
    ) -> (Vec<T>, SortStatistics)
    where
        O: SwapObserver<T> + ?Sized,
    {
        let source = input.unwrap_or(self.data.as_slice());
        let (sorted, stats) = algorithm.run(source, observer);
        self.last_run = Some(stats);
        (sorted, stats)
    }
}

impl<T: Ord + Clone> Default for Sorter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl Sorter<i64> {
    /// Replace the stored data with `size` uniform integers from `[min_value, max_value]`
    pub fn generate_test_data(&mut self, size: usize, min_value: i64, max_value: i64) -> Result<&[i64], InputError> {
        if min_value > max_value {
            return Err(InputError::InvalidRange { min: min_value, max: max_value });
        }

        let mut rng = rand::thread_rng();
        self.data = (0..size).map(|_| rng.gen_range(min_value..=max_value)).collect();
        Ok(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_stored_data() {
        let mut sorter = Sorter::with_data(vec![3, 1, 2]);
        let (sorted, _) = sorter.sort_basic(None);
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(sorter.data(), &[3, 1, 2]);
    }

    #[test]
    fn test_explicit_input_wins() {
        let mut sorter = Sorter::with_data(vec![9, 8]);
        let (sorted, _) = sorter.sort_bidirectional(Some(&[2, 1, 0][..]));
        assert_eq!(sorted, vec![0, 1, 2]);
    }

    #[test]
    fn test_last_statistics_tracks_latest_run() {
        let mut sorter: Sorter<i32> = Sorter::new();
        assert!(sorter.last_statistics().is_none());

        let (_, first) = sorter.sort_basic(Some(&[5, 4, 3, 2, 1][..]));
        assert_eq!(sorter.last_statistics().map(|s| s.swaps), Some(first.swaps));

        let (_, second) = sorter.sort_bidirectional(Some(&[1, 2][..]));
        assert_eq!(sorter.last_statistics().map(|s| s.swaps), Some(second.swaps));
        assert_eq!(second.swaps, 0);
    }

    #[test]
    fn test_generate_test_data_range() {
        let mut sorter: Sorter<i64> = Sorter::new();
        let data = sorter.generate_test_data(50, -5, 5).unwrap().to_vec();
        assert_eq!(data.len(), 50);
        assert!(data.iter().all(|v| (-5..=5).contains(v)));
        assert_eq!(sorter.data(), data.as_slice());
    }

    #[test]
    fn test_generate_test_data_single_value_range() {
        let mut sorter: Sorter<i64> = Sorter::new();
        let data = sorter.generate_test_data(4, 7, 7).unwrap();
        assert_eq!(data, &[7, 7, 7, 7]);
    }

    #[test]
    fn test_generate_test_data_rejects_inverted_range() {
        let mut sorter: Sorter<i64> = Sorter::new();
        let err = sorter.generate_test_data(3, 10, 1).unwrap_err();
        assert_eq!(err, InputError::InvalidRange { min: 10, max: 1 });
        assert!(sorter.data().is_empty());
    }
}
