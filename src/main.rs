use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use eyre::{Result, bail};
use secret_recovery::{
    encoding::DEFAULT_MAX_BITS,
    error::Stage,
    problem::{Import, ProblemSet, Solver, SolverConfig},
    recovery::selection::QuorumPolicy,
};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[clap(name = "recover-secret", about = "Recover secrets from threshold shares")]
struct Args {
    /// Turn debugging information on.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Problem documents to solve.
    #[clap(value_name = "FILE", default_values = ["testcase1.json", "testcase2.json"])]
    files: Vec<PathBuf>,
    /// Maximum width of a decoded share value, in bits.
    #[clap(long, value_name = "BITS", default_value_t = DEFAULT_MAX_BITS)]
    max_bits: u64,
    /// How the quorum of k shares is chosen.
    #[clap(long, value_enum, default_value_t = Quorum::First)]
    quorum: Quorum,
}

#[derive(Clone, Copy, ValueEnum)]
enum Quorum {
    /// The first k shares, in document order.
    First,
    /// The first k shares with distinct indices.
    Distinct,
}

impl From<Quorum> for QuorumPolicy {
    fn from(q: Quorum) -> Self {
        match q {
            Quorum::First => QuorumPolicy::FirstK,
            Quorum::Distinct => QuorumPolicy::FirstDistinct,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set the tracing subscriber.
    set_tracing_subscriber(args.verbose)?;

    let solver = Solver::new(SolverConfig {
        max_bits: args.max_bits,
        quorum: args.quorum.into(),
    });

    let mut unreadable = 0usize;
    let mut failures = 0usize;

    for file in &args.files {
        let set = match ProblemSet::import(file) {
            Ok(set) => set,
            Err(e) => {
                eprintln!("Error: {e}");
                unreadable += 1;
                continue;
            }
        };

        tracing::info!("Loaded {} problem(s) from {}", set.len(), file.display());

        let results = solver.solve_all(set.problems());
        for (i, result) in results.into_iter().enumerate() {
            let label = if set.len() == 1 {
                file.display().to_string()
            } else {
                format!("{}#{}", file.display(), i + 1)
            };

            match result {
                Ok(secret) => println!("Secret for test case {label}: {secret}"),
                Err(e) => {
                    let stage = match e.stage() {
                        Stage::Decode => "decoding",
                        Stage::Interpolation => "interpolation",
                    };
                    eprintln!("Test case {label} failed during {stage}: {e}");
                    failures += 1;
                }
            }
        }
    }

    match (unreadable, failures) {
        (0, 0) => Ok(()),
        (0, f) => bail!("{f} problem(s) could not be solved"),
        (u, 0) => bail!("{u} file(s) could not be loaded"),
        (u, f) => bail!("{u} file(s) could not be loaded and {f} problem(s) could not be solved"),
    }
}

fn set_tracing_subscriber(verbosity: u8) -> Result<()> {
    let log_level = match verbosity {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
