// Bubble sort variants with instrumentation
//
// Both functions copy the input, sort the copy in ascending order and count
// the work done. The caller's slice is never touched.

use crate::sorting::timer::time_once;
use crate::sorting::trace::{SwapEvent, SwapObserver};
use crate::sorting::SortStatistics;

/// Unidirectional bubble sort with early exit.
///
/// Pass `i` scans pairs `0..n - i - 1`. A pass with no exchanges ends the
/// sort, so sorted input costs one pass of `n - 1` comparisons. At most
/// `n - 1` passes run; empty and single-element input runs none.
pub fn bubble_sort<T, O>(input: &[T], observer: &mut O) -> (Vec<T>, SortStatistics)
where
    T: Ord + Clone,
    O: SwapObserver<T> + ?Sized,
{
    let mut items = input.to_vec();
    let mut stats = SortStatistics::default();

    let ((), elapsed) = time_once(|| {
        let n = items.len();
        for i in 0..n.saturating_sub(1) {
            stats.iterations += 1;
            let mut swapped = false;

            for j in 0..n - i - 1 {
                stats.comparisons += 1;
                if items[j] > items[j + 1] {
                    items.swap(j, j + 1);
                    stats.swaps += 1;
                    swapped = true;
                    observer.on_swap(SwapEvent {
                        pass: i + 1,
                        index: j,
                        larger: &items[j + 1],
                        smaller: &items[j],
                        sequence: &items,
                    });
                }
            }

            if !swapped {
                break;
            }
        }
    });

    stats.execution_time = elapsed;
    (items, stats)
}

/// Cocktail shaker sort.
///
/// Each round is a forward pass over `left..right` followed by a backward
/// pass over `right..left`, shrinking the window by one at each end. The sort
/// stops as soon as either pass makes no exchange. `iterations` counts
/// completed rounds, so a round cut short after its forward pass is not
/// counted.
pub fn cocktail_shaker_sort<T, O>(input: &[T], observer: &mut O) -> (Vec<T>, SortStatistics)
where
    T: Ord + Clone,
    O: SwapObserver<T> + ?Sized,
{
    let mut items = input.to_vec();
    let mut stats = SortStatistics::default();

    let ((), elapsed) = time_once(|| {
        if items.len() < 2 {
            return;
        }
        let mut left = 0;
        let mut right = items.len() - 1;

        while left < right {
            let round = stats.iterations + 1;

            let mut swapped = false;
            for i in left..right {
                stats.comparisons += 1;
                if items[i] > items[i + 1] {
                    items.swap(i, i + 1);
                    stats.swaps += 1;
                    swapped = true;
                    observer.on_swap(SwapEvent {
                        pass: round,
                        index: i,
                        larger: &items[i + 1],
                        smaller: &items[i],
                        sequence: &items,
                    });
                }
            }
            right -= 1;
            if !swapped {
                break;
            }

            swapped = false;
            for i in (left + 1..=right).rev() {
                stats.comparisons += 1;
                if items[i] < items[i - 1] {
                    items.swap(i, i - 1);
                    stats.swaps += 1;
                    swapped = true;
                    observer.on_swap(SwapEvent {
                        pass: round,
                        index: i - 1,
                        larger: &items[i],
                        smaller: &items[i - 1],
                        sequence: &items,
                    });
                }
            }
            left += 1;
            stats.iterations += 1;
            if !swapped {
                break;
            }
        }
    });

    stats.execution_time = elapsed;
    (items, stats)
}
