//! Command line input handling

use crate::{algorithms::Algorithm, data::DataShape, error::Error};

/// Command line arguments
#[derive(clap::Parser)]
#[command(
    author,
    version,
    about,
    subcommand_value_name = "command",
    disable_help_subcommand = true
)]
pub struct Args {
    /// What to do, defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,
    /// Seed for the rng
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// The number of sorted elements to print
    #[arg(short, long, global = true, default_value_t = crate::report::DEFAULT_PREVIEW)]
    pub preview: usize,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Sort the dataset with a single algorithm
    Sort {
        /// The sorting algorithm to run
        #[arg()]
        algorithm: Algorithm,
        #[command(flatten)]
        data: DataArgs,
    },
    /// Sort the dataset with every algorithm and print a comparison table
    Compare {
        #[command(flatten)]
        data: DataArgs,
    },
    /// Show the interactive menu
    Interactive,
}

/// Where the dataset comes from
#[derive(Debug, clap::Args)]
pub struct DataArgs {
    /// The numbers to sort, separated by whitespace
    #[arg(long, allow_hyphen_values = true, conflicts_with = "size")]
    pub values: Option<String>,
    /// The number of random values to generate
    #[arg(short, long)]
    pub size: Option<usize>,
    /// The largest random value to generate
    #[arg(short, long, default_value_t = 1_000)]
    pub max: i64,
    /// The shape of the generated data
    #[arg(long, default_value_t = DataShape::Uniform)]
    pub shape: DataShape,
}

impl DataArgs {
    /// Parse or generate the dataset described by the arguments
    pub fn load<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<i64>, Error> {
        let values = match (&self.values, self.size) {
            (Some(values), _) => crate::data::parse_manual(values)?,
            (None, Some(size)) => self.shape.generate(size, self.max, rng)?,
            (None, None) => return Err(Error::MissingDataset),
        };

        tracing::info!(len = values.len(), "dataset loaded");
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("sort-comparator").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn no_command_is_interactive() {
        let args = parse(&[]);
        assert!(args.command.is_none());
        assert_eq!(args.preview, crate::report::DEFAULT_PREVIEW);
    }

    #[test]
    fn sort_with_values() {
        let args = parse(&["sort", "merge", "--values", "-3 1 2", "--seed", "7"]);
        assert_eq!(args.seed, Some(7));
        let Some(Command::Sort { algorithm, data }) = args.command else {
            panic!("expected the sort command");
        };
        assert_eq!(algorithm, Algorithm::Merge);
        let mut rng = crate::test::test_rng();
        assert_eq!(data.load(&mut rng).unwrap(), vec![-3, 1, 2]);
    }

    #[test]
    fn compare_with_generated_data() {
        let args = parse(&["compare", "-s", "20", "-m", "5", "--shape", "descending"]);
        let Some(Command::Compare { data }) = args.command else {
            panic!("expected the compare command");
        };
        let mut rng = crate::test::test_rng();
        let values = data.load(&mut rng).unwrap();
        assert_eq!(values.len(), 20);
        assert!(values.iter().rev().is_sorted());
    }

    #[test]
    fn missing_dataset() {
        let args = parse(&["compare"]);
        let Some(Command::Compare { data }) = args.command else {
            panic!("expected the compare command");
        };
        let mut rng = crate::test::test_rng();
        assert!(matches!(data.load(&mut rng), Err(Error::MissingDataset)));
    }

    #[test]
    fn values_conflict_with_size() {
        assert!(
            Args::try_parse_from(["sort-comparator", "compare", "--values", "1", "--size", "3"])
                .is_err()
        );
    }
}
