use std::io::{self, BufWriter};

use matecheck::transcript::Transcript;
use matecheck::Challenge;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the transcript, so diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn run() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut transcript = Transcript::new(BufWriter::new(stdout.lock()));
    Challenge::standard().run(&mut transcript)?;
    transcript.flush()?;
    tracing::debug!(steps = transcript.steps(), "transcript written");
    Ok(())
}

fn main() {
    init_tracing();

    // Exit status stays 0 even if stdout goes away mid-run.
    if let Err(err) = run() {
        tracing::error!("{err:#}");
    }
}
