//! Bubble sort with early exit

use super::Steps;

/// The bubble [`super::Sort`]
///
/// Charges one step per adjacent comparison and [`Steps::SWAP_COST`] per swap.
pub struct BubbleSort;

impl super::Sort for BubbleSort {
    const NAME: &'static str = "Bubble Sort";
    const IS_STABLE: bool = true;

    fn sort_counted<T: Ord + Clone>(slice: &mut [T], steps: &mut Steps) {
        if slice.len() < 2 {
            return;
        }

        // After each pass the largest element of the unsorted prefix is in place
        for sorted_suffix in 0..slice.len() - 1 {
            let mut swapped = false;

            for j in 0..slice.len() - 1 - sorted_suffix {
                steps.compare();
                if slice[j] > slice[j + 1] {
                    slice.swap(j, j + 1);
                    steps.swap();
                    swapped = true;
                }
            }

            // A pass without swaps means we are done
            if !swapped {
                break;
            }
        }
    }
}
