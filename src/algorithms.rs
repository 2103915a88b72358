//! The instrumented sorting algorithms and the contract they share

pub mod bubblesort;
pub mod mergesort;
pub mod quicksort;

/// A running tally of the abstract work done by a sort
///
/// Each algorithm decides where to charge steps, the tally itself is independent of the
/// machine, so two runs on the same input always end up with the same count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Steps(u64);

impl Steps {
    /// The cost of swapping two elements (three assignments through a temporary)
    pub const SWAP_COST: u64 = 3;

    /// Charge a single comparison
    pub fn compare(&mut self) {
        self.0 += 1;
    }

    /// Charge a swap of two elements
    pub fn swap(&mut self) {
        self.0 += Self::SWAP_COST;
    }

    /// Charge a single element copy or write-back
    pub fn assign(&mut self) {
        self.0 += 1;
    }

    /// The total number of steps charged so far
    pub fn count(self) -> u64 {
        self.0
    }
}

/// The outcome of a single measured sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement<T> {
    elapsed: std::time::Duration,
    steps: u64,
    sorted: Vec<T>,
}

impl<T> Measurement<T> {
    /// The time spent copying and sorting the input
    pub fn elapsed(&self) -> std::time::Duration {
        self.elapsed
    }

    /// The elapsed time in (fractional) milliseconds
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed().as_nanos() as f64 / 1_000_000.0
    }

    /// The number of steps charged by the algorithm
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// The sorted copy of the input
    pub fn sorted(&self) -> &[T] {
        &self.sorted
    }
}

/// A sorting algorithm that counts its own work
pub trait Sort {
    /// The human readable name
    const NAME: &'static str;
    /// Whether the algorithm keeps equal elements in their original order
    const IS_STABLE: bool;

    /// Sort `slice` in place, charging the work to `steps`
    fn sort_counted<T: Ord + Clone>(slice: &mut [T], steps: &mut Steps);

    /// Sort a private copy of `input` and measure the time and steps it took
    ///
    /// `input` itself is never modified.
    fn measure<T: Ord + Clone>(input: &[T]) -> Measurement<T> {
        let now = std::time::Instant::now();
        let mut sorted = input.to_vec();
        let mut steps = Steps::default();
        Self::sort_counted(std::hint::black_box(&mut sorted), &mut steps);
        let elapsed = now.elapsed();

        debug_assert!(sorted.is_sorted(), "{} left the slice unsorted", Self::NAME);
        tracing::debug!(
            algorithm = Self::NAME,
            len = input.len(),
            steps = steps.count(),
            elapsed_ns = elapsed.as_nanos() as u64,
            "sort finished"
        );

        Measurement {
            elapsed,
            steps: steps.count(),
            sorted,
        }
    }
}

/// The different sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// Bubble sort with early exit
    Bubble,
    /// Top-down mergesort
    Merge,
    /// Quicksort with Lomuto partitioning
    Quick,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Algorithm::Bubble => bubblesort::BubbleSort::NAME,
            Algorithm::Merge => mergesort::MergeSort::NAME,
            Algorithm::Quick => quicksort::QuickSort::NAME,
        })
    }
}

impl Algorithm {
    /// Every algorithm, in menu order
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Merge, Algorithm::Quick];

    /// Run the algorithm on a copy of `input`
    pub fn measure<T: Ord + Clone>(self, input: &[T]) -> Measurement<T> {
        match self {
            Algorithm::Bubble => bubblesort::BubbleSort::measure(input),
            Algorithm::Merge => mergesort::MergeSort::measure(input),
            Algorithm::Quick => quicksort::QuickSort::measure(input),
        }
    }

    /// Return whether the sort is stable
    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::Bubble => bubblesort::BubbleSort::IS_STABLE,
            Algorithm::Merge => mergesort::MergeSort::IS_STABLE,
            Algorithm::Quick => quicksort::QuickSort::IS_STABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Data as _;

    const EXAMPLE: [i64; 5] = [5, 2, 9, 1, 5];

    #[test]
    fn example_fixtures() {
        let expected = [
            (Algorithm::Bubble, 25),
            (Algorithm::Merge, 32),
            (Algorithm::Quick, 24),
        ];

        for (algorithm, steps) in expected {
            let input = EXAMPLE;
            let measurement = algorithm.measure(&input);
            assert_eq!(measurement.sorted(), &[1, 2, 5, 5, 9], "{algorithm}");
            assert_eq!(measurement.steps(), steps, "{algorithm}");
            assert_eq!(input, EXAMPLE, "{algorithm} touched its input");
        }
    }

    #[test]
    fn degenerate_inputs() {
        for algorithm in Algorithm::ALL {
            let empty = algorithm.measure::<i64>(&[]);
            assert_eq!(empty.steps(), 0);
            assert!(empty.sorted().is_empty());

            let single = algorithm.measure(&[-7i64]);
            assert_eq!(single.steps(), 0);
            assert_eq!(single.sorted(), &[-7]);
        }
    }

    #[test]
    fn sorted_input_is_idempotent() {
        let input: Vec<i64> = (-20..20).collect();
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.measure(&input).sorted(), input.as_slice());
        }
    }

    #[test]
    fn deterministic_steps() {
        let mut rng = crate::test::test_rng();
        let input = crate::data::UniformData::initialize(500, 100, &mut rng).unwrap();
        for algorithm in Algorithm::ALL {
            assert_eq!(
                algorithm.measure(&input).steps(),
                algorithm.measure(&input).steps()
            );
        }
    }

    #[test]
    fn steps_tally() {
        let mut steps = Steps::default();
        steps.compare();
        steps.swap();
        steps.assign();
        assert_eq!(steps.count(), 5);
    }

    #[test]
    fn display_names() {
        assert_eq!(Algorithm::Bubble.to_string(), "Bubble Sort");
        assert_eq!(Algorithm::Merge.to_string(), "Merge Sort");
        assert_eq!(Algorithm::Quick.to_string(), "Quick Sort");
        assert!(Algorithm::Merge.is_stable());
        assert!(!Algorithm::Quick.is_stable());
    }
}
