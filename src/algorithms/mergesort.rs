//! The top-down mergesort implementation

use super::Steps;

/// The Top-Down Mergesort [`super::Sort`]
///
/// Every merge charges one step per element copied into the run buffers, one per head-to-head
/// comparison and one per element written back.
pub struct MergeSort;

impl super::Sort for MergeSort {
    const NAME: &'static str = "Merge Sort";
    const IS_STABLE: bool = true;

    fn sort_counted<T: Ord + Clone>(slice: &mut [T], steps: &mut Steps) {
        if slice.len() < 2 {
            return;
        }

        // The left run takes the extra element of odd lengths
        let middle = slice.len().div_ceil(2);

        let (left, right) = slice.split_at_mut(middle);
        Self::sort_counted(left, steps);
        Self::sort_counted(right, steps);

        merge(slice, middle, steps);
    }
}

/// Merge the sorted runs `slice[..middle]` and `slice[middle..]`
fn merge<T: Ord + Clone>(slice: &mut [T], middle: usize, steps: &mut Steps) {
    assert!(
        (0..=slice.len()).contains(&middle),
        "Split point needs to be in bounds"
    );

    let left = copy_run(&slice[..middle], steps);
    let right = copy_run(&slice[middle..], steps);

    let (mut i, mut j) = (0, 0);
    for slot in slice.iter_mut() {
        let take_left = match (left.get(i), right.get(j)) {
            (Some(l), Some(r)) => {
                steps.compare();
                // Ties go to the left run which keeps the sort stable
                l <= r
            }
            // Only leftovers of one run remain
            (Some(_), None) => true,
            (None, _) => false,
        };

        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
        steps.assign();
    }

    debug_assert_eq!((i, j), (left.len(), right.len()));
}

/// Copy a run into a fresh buffer, one step per element
fn copy_run<T: Clone>(run: &[T], steps: &mut Steps) -> Vec<T> {
    let mut buffer = Vec::with_capacity(run.len());
    for element in run {
        buffer.push(element.clone());
        steps.assign();
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Sort as _;

    const RUNS: usize = 100;
    const TEST_SIZE: usize = 10_000;

    #[test]
    fn empty() {
        crate::test::test_empty::<MergeSort>();
    }

    #[test]
    fn single() {
        crate::test::test_single::<MergeSort>();
    }

    #[test]
    fn random() {
        crate::test::test_random_sorted::<RUNS, TEST_SIZE, MergeSort>();
    }

    #[test]
    fn random_stable() {
        crate::test::test_random_stable_sorted::<RUNS, TEST_SIZE, MergeSort>();
    }

    #[test]
    fn single_merge_cost() {
        // Copy 2, compare once, write back 2
        let mut slice = [2, 1];
        let mut steps = Steps::default();
        merge(&mut slice, 1, &mut steps);
        assert_eq!(slice, [1, 2]);
        assert_eq!(steps.count(), 5);

        // Left run is exhausted after a single comparison
        let mut slice = [1, 2, 3, 4];
        let mut steps = Steps::default();
        merge(&mut slice, 1, &mut steps);
        assert_eq!(slice, [1, 2, 3, 4]);
        assert_eq!(steps.count(), 4 + 1 + 4);
    }

    #[test]
    fn merge_takes_left_on_ties_then_drains() {
        let mut slice: Vec<_> =
            crate::test::IndexedOrdered::map_iter([1, 3, 3, 2, 3, 4].into_iter()).collect();
        let mut steps = Steps::default();
        merge(&mut slice, 3, &mut steps);
        assert!(crate::test::IndexedOrdered::is_stable_sorted(&slice));
        // Copy 6, four comparisons until the left run runs out, write back 6
        assert_eq!(steps.count(), 6 + 4 + 6);
    }

    #[test]
    fn cost_is_twice_the_run_lengths_plus_comparisons() {
        // Sizes that are powers of two on sorted input compare until the left run is exhausted,
        // i.e. `len / 2` comparisons per merge
        let input: Vec<i64> = (0..8).collect();
        let measurement = MergeSort::measure(&input);
        // Four merges of 2, two of 4, one of 8
        let expected = 4 * (2 * 2 + 1) + 2 * (2 * 4 + 2) + (2 * 8 + 4);
        assert_eq!(measurement.steps(), expected);
    }

    #[test]
    fn odd_split_favours_left() {
        // [5, 2, 9] splits into [5, 2] and [9]: merges cost 5 and 8
        let measurement = MergeSort::measure(&[5, 2, 9]);
        assert_eq!(measurement.sorted(), &[2, 5, 9]);
        assert_eq!(measurement.steps(), 13);
    }
}
