use clap::Parser as _;
use rand::SeedableRng;

mod algorithms;
mod cli;
mod data;
mod error;
mod report;
mod session;


/// Program entry point
fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli::Args::parse()) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "aborting");
            eprintln!("Error: {error}");
            std::process::ExitCode::FAILURE
        }
    }
}

fn run(args: cli::Args) -> Result<(), error::Error> {
    let cli::Args {
        command,
        seed,
        preview,
    } = args;

    let mut rng = match seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_os_rng(),
    };

    match command.unwrap_or(cli::Command::Interactive) {
        cli::Command::Sort { algorithm, data } => {
            let values = data.load(&mut rng)?;
            println!(
                "Running {algorithm} (stable: {stable}) on {len} numbers...",
                stable = algorithm.is_stable(),
                len = values.len(),
            );

            let measurement = algorithm.measure(&values);
            print!(
                "{}",
                report::render_measurement(algorithm, &measurement, preview)
            );
        }
        cli::Command::Compare { data } => {
            let values = data.load(&mut rng)?;
            println!(
                "Running all algorithms on dataset of {} elements...",
                values.len()
            );

            let rows = report::compare_all(&values);
            println!();
            print!("{}", report::render_comparison(&rows));
        }
        cli::Command::Interactive => {
            let stdin = std::io::stdin();
            let mut session = session::Session::new(stdin.lock(), std::io::stdout(), rng, preview);
            session.run()?;
            tracing::debug!(
                len = session.dataset().map_or(0, <[i64]>::len),
                "session ended"
            );
        }
    }

    Ok(())
}
