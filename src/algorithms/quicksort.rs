//! Quicksort with Lomuto partitioning

use super::Steps;

/// The Quicksort [`super::Sort`]
///
/// The pivot is always the last element of the range, so sorted and reversed inputs take a
/// quadratic number of steps. Only the smaller partition is recursed into, the larger one is
/// handled by the loop, which keeps the stack depth logarithmic even then.
pub struct QuickSort;

impl super::Sort for QuickSort {
    const NAME: &'static str = "Quick Sort";
    const IS_STABLE: bool = false;

    fn sort_counted<T: Ord + Clone>(mut slice: &mut [T], steps: &mut Steps) {
        while slice.len() > 1 {
            let pivot = partition(slice, steps);

            let (left, rest) = std::mem::take(&mut slice).split_at_mut(pivot);
            let right = &mut rest[1..];

            if left.len() < right.len() {
                Self::sort_counted(left, steps);
                slice = right;
            } else {
                Self::sort_counted(right, steps);
                slice = left;
            }
        }
    }
}

/// Partition `slice` around its last element and return the pivot's final index
///
/// Every scanned element costs a comparison, every element moved below the boundary a swap
/// (even if it swaps with itself), and placing the pivot always costs a swap.
fn partition<T: Ord>(slice: &mut [T], steps: &mut Steps) -> usize {
    assert!(!slice.is_empty(), "Cannot partition an empty slice");

    let high = slice.len() - 1;
    // Everything in slice[..boundary] is smaller than the pivot
    let mut boundary = 0;

    for j in 0..high {
        steps.compare();
        if slice[j] < slice[high] {
            slice.swap(boundary, j);
            steps.swap();
            boundary += 1;
        }
    }

    slice.swap(boundary, high);
    steps.swap();

    boundary
}
