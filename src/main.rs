//! gesture-ml command-line front-end
//!
//! Usage:
//!   gesture-ml predict --input hand.json     # JSON array of [x, y(, z)] rows, or null
//!   gesture-ml classify 1 0 0 0 0            # raw fingertip distances
//!   gesture-ml signatures                    # active signature table

use std::io;

use gesture_ml::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(&cli, &mut out)
}
