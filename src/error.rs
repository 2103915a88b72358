//! Error types

/// Reasons a dataset is rejected before it reaches the sorts
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("'{token}' is not a whole number")]
    InvalidNumber {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("no numbers were entered")]
    Empty,
    #[error("size must be greater than 0")]
    ZeroSize,
    #[error("size must be at most {max}, got {0}", max = crate::data::MAX_SIZE)]
    TooLarge(usize),
    #[error("maximum value must not be negative, got {0}")]
    NegativeMax(i64),
}

/// Top level errors of the command line tool
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid dataset: {0}")]
    Dataset(#[from] DatasetError),
    #[error("no dataset given, pass either --values or --size")]
    MissingDataset,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
