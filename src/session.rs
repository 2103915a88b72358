//! The interactive menu

use std::io::{BufRead, Write};

use crate::{
    algorithms::Algorithm,
    data::{self, Data as _},
    report,
};

/// Generated datasets up to this size are echoed back
const ECHO_LIMIT: usize = 50;

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    EnterManually,
    GenerateRandom,
    Sort(Algorithm),
    CompareAll,
    Exit,
}

impl Choice {
    fn from_number(number: u32) -> Option<Self> {
        Some(match number {
            1 => Choice::EnterManually,
            2 => Choice::GenerateRandom,
            3 => Choice::Sort(Algorithm::Bubble),
            4 => Choice::Sort(Algorithm::Merge),
            5 => Choice::Sort(Algorithm::Quick),
            6 => Choice::CompareAll,
            7 => Choice::Exit,
            _ => return None,
        })
    }
}

/// An interactive session reading commands from `input` and writing to `output`
pub struct Session<I, O, R> {
    input: I,
    output: O,
    rng: R,
    dataset: data::Dataset,
    preview: usize,
    /// Tokens left over from the last line read by a prompt
    pending: std::collections::VecDeque<String>,
}

impl<I: BufRead, O: Write, R: rand::Rng> Session<I, O, R> {
    pub fn new(input: I, output: O, rng: R, preview: usize) -> Self {
        Self {
            input,
            output,
            rng,
            dataset: data::Dataset::default(),
            preview,
            pending: std::collections::VecDeque::new(),
        }
    }

    /// The currently loaded dataset
    pub fn dataset(&self) -> Option<&[i64]> {
        self.dataset.values()
    }

    /// Show the menu until the user exits or the input ends
    pub fn run(&mut self) -> std::io::Result<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed, leaving the menu");
                return Ok(());
            };

            let choice = match line.trim().parse::<u32>() {
                Ok(number) => Choice::from_number(number),
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    writeln!(self.output)?;
                    continue;
                }
            };

            match choice {
                Some(Choice::EnterManually) => self.enter_manually()?,
                Some(Choice::GenerateRandom) => self.generate_random()?,
                Some(Choice::Sort(algorithm)) => self.perform_sort(algorithm)?,
                Some(Choice::CompareAll) => self.compare_all()?,
                Some(Choice::Exit) => {
                    self.print_farewell()?;
                    return Ok(());
                }
                None => writeln!(
                    self.output,
                    "Invalid choice. Please enter a number between 1 and 7."
                )?,
            }

            writeln!(self.output)?;
        }
    }

    /// Read a line, `None` at the end of the input
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    /// The next whitespace separated token, reading further lines as needed
    fn next_token(&mut self) -> std::io::Result<Option<String>> {
        while self.pending.is_empty() {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Prompt for a single number, `None` if the input ended or was not a number
    fn prompt_number<T: std::str::FromStr>(&mut self, prompt: &str) -> std::io::Result<Option<T>> {
        write!(self.output, "{prompt}")?;
        Ok(self.next_token()?.and_then(|token| token.parse::<T>().ok()))
    }

    fn print_menu(&mut self) -> std::io::Result<()> {
        writeln!(
            self.output,
            "--- Data Sorter: Sorting Algorithm Comparison Tool ---"
        )?;
        match self.dataset.values() {
            Some(values) => writeln!(self.output, "Current Dataset: {} numbers.", values.len())?,
            None => writeln!(
                self.output,
                "Current Dataset: None (Please load or generate data)"
            )?,
        }
        writeln!(self.output, "{}", "-".repeat(54))?;
        writeln!(self.output, "1. Enter numbers manually")?;
        writeln!(self.output, "2. Generate random numbers")?;
        for (number, algorithm) in (3..).zip(Algorithm::ALL) {
            writeln!(self.output, "{number}. Perform {algorithm}")?;
        }
        writeln!(self.output, "6. Compare all algorithms (show performance table)")?;
        writeln!(self.output, "7. Exit")?;
        write!(self.output, "Enter your choice: ")
    }

    fn enter_manually(&mut self) -> std::io::Result<()> {
        writeln!(
            self.output,
            "Enter numbers separated by spaces (e.g., 5 2 9 1):"
        )?;
        let line = self.read_line()?.unwrap_or_default();

        match self.dataset.load(data::parse_manual(&line)) {
            Ok(values) => {
                let loaded = report::preview(values, usize::MAX);
                writeln!(self.output, "Data loaded: {loaded}")
            }
            Err(error) => writeln!(
                self.output,
                "Invalid input ({error}). Please enter only numbers separated by spaces."
            ),
        }
    }

    /// Ask for the size and the maximum value, both may be given on one line
    fn prompt_generation(&mut self) -> std::io::Result<Option<(usize, i64)>> {
        let Some(size) = self.prompt_number("Enter number of elements to generate: ")? else {
            return Ok(None);
        };
        let Some(max) = self.prompt_number("Enter maximum value: ")? else {
            return Ok(None);
        };
        Ok(Some((size, max)))
    }

    fn generate_random(&mut self) -> std::io::Result<()> {
        let parameters = self.prompt_generation();
        // The rest of the line is discarded, the menu reads a fresh one
        self.pending.clear();
        let Some((size, max)) = parameters? else {
            return writeln!(self.output, "Invalid input. Please enter valid numbers.");
        };

        let generated = data::UniformData::initialize(size, max, &mut self.rng);
        match self.dataset.load(generated) {
            Ok(values) => {
                writeln!(self.output, "{size} random numbers generated.")?;
                if values.len() <= ECHO_LIMIT {
                    writeln!(self.output, "Data: {}", report::preview(values, ECHO_LIMIT))?;
                }
                Ok(())
            }
            Err(error) => writeln!(self.output, "Invalid input: {error}."),
        }
    }

    fn print_missing_dataset(&mut self) -> std::io::Result<()> {
        writeln!(
            self.output,
            "No data to sort. Please load or generate data first (Option 1 or 2)."
        )
    }

    fn perform_sort(&mut self, algorithm: Algorithm) -> std::io::Result<()> {
        let Some(values) = self.dataset.values() else {
            return self.print_missing_dataset();
        };

        writeln!(self.output, "Running {algorithm}...")?;
        let measurement = algorithm.measure(values);
        write!(
            self.output,
            "{}",
            report::render_measurement(algorithm, &measurement, self.preview)
        )
    }

    fn compare_all(&mut self) -> std::io::Result<()> {
        let Some(values) = self.dataset.values() else {
            return self.print_missing_dataset();
        };

        writeln!(
            self.output,
            "Running all algorithms on dataset of {} elements...",
            values.len()
        )?;
        let rows = report::compare_all(values);
        writeln!(self.output)?;
        write!(self.output, "{}", report::render_comparison(&rows))
    }

    fn print_farewell(&mut self) -> std::io::Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Thank you for using the Sorting Algorithm Comparison Tool!"
        )?;
        writeln!(self.output, "Goodbye!")
    }
}
