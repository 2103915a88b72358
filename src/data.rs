//! Dataset creation, either typed in by hand or generated

use rand::distr::Distribution as _;

use crate::error::DatasetError;

/// The largest dataset that may be generated
pub const MAX_SIZE: usize = 10_000_000;

/// A trait for generalizing sorting data creation
pub trait Data {
    /// Initialize a vector of the given size with values in `0..=max`
    fn initialize<R: rand::Rng + ?Sized>(
        size: usize,
        max: i64,
        rng: &mut R,
    ) -> Result<Vec<i64>, DatasetError>;
}

/// Values drawn uniformly from `0..=max`
#[derive(Debug)]
pub struct UniformData;

impl Data for UniformData {
    fn initialize<R: rand::Rng + ?Sized>(
        size: usize,
        max: i64,
        rng: &mut R,
    ) -> Result<Vec<i64>, DatasetError> {
        if size == 0 {
            return Err(DatasetError::ZeroSize);
        }
        if size > MAX_SIZE {
            return Err(DatasetError::TooLarge(size));
        }

        Ok(rand::distr::Uniform::new_inclusive(0, max)
            .map_err(|_| DatasetError::NegativeMax(max))?
            .sample_iter(rng)
            .take(size)
            .collect())
    }
}

/// Uniform values, already in ascending order
#[derive(Debug)]
pub struct AscendingData;

impl Data for AscendingData {
    fn initialize<R: rand::Rng + ?Sized>(
        size: usize,
        max: i64,
        rng: &mut R,
    ) -> Result<Vec<i64>, DatasetError> {
        let mut values = UniformData::initialize(size, max, rng)?;
        values.sort_unstable();
        Ok(values)
    }
}

/// Uniform values in descending order
#[derive(Debug)]
pub struct DescendingData;

impl Data for DescendingData {
    fn initialize<R: rand::Rng + ?Sized>(
        size: usize,
        max: i64,
        rng: &mut R,
    ) -> Result<Vec<i64>, DatasetError> {
        let mut values = UniformData::initialize(size, max, rng)?;
        values.sort_unstable_by(|a, b| b.cmp(a));
        Ok(values)
    }
}

/// Available shapes for generated data
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DataShape {
    #[default]
    Uniform,
    Ascending,
    Descending,
}

impl std::fmt::Display for DataShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DataShape::Uniform => "uniform",
            DataShape::Ascending => "ascending",
            DataShape::Descending => "descending",
        })
    }
}

impl DataShape {
    /// Generate `size` values in `0..=max` with this shape
    pub fn generate<R: rand::Rng + ?Sized>(
        self,
        size: usize,
        max: i64,
        rng: &mut R,
    ) -> Result<Vec<i64>, DatasetError> {
        match self {
            DataShape::Uniform => UniformData::initialize(size, max, rng),
            DataShape::Ascending => AscendingData::initialize(size, max, rng),
            DataShape::Descending => DescendingData::initialize(size, max, rng),
        }
    }
}

/// Parse a line of whitespace separated integers
pub fn parse_manual(line: &str) -> Result<Vec<i64>, DatasetError> {
    let values = line
        .split_whitespace()
        .map(|token| {
            token.parse().map_err(|source| DatasetError::InvalidNumber {
                token: token.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<i64>, _>>()?;

    if values.is_empty() {
        return Err(DatasetError::Empty);
    }

    Ok(values)
}

/// The dataset currently loaded by the user
///
/// Loading replaces the values only on success, a rejected load keeps the previous ones.
#[derive(Debug, Default)]
pub struct Dataset {
    values: Option<Vec<i64>>,
}

impl Dataset {
    /// The loaded values, if any
    pub fn values(&self) -> Option<&[i64]> {
        self.values.as_deref()
    }

    /// Replace the dataset with the outcome of `load` if it succeeded
    pub fn load(
        &mut self,
        load: Result<Vec<i64>, DatasetError>,
    ) -> Result<&[i64], DatasetError> {
        match load {
            Ok(values) => {
                tracing::info!(len = values.len(), "dataset loaded");
                Ok(self.values.insert(values).as_slice())
            }
            Err(error) => {
                tracing::warn!(%error, "dataset rejected, keeping the previous one");
                Err(error)
            }
        }
    }
}
