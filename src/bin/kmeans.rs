use std::io::{self, Write};
use std::panic;
use std::process::ExitCode;

use kmeans_lloyd::cli;
use kmeans_lloyd::error::{KMeansError, Result};
use log::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr and are controlled by RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    // A panic must never print a trace; it surfaces as the generic error.
    panic::set_hook(Box::new(|info| debug!("panic: {info}")));

    let outcome = panic::catch_unwind(|| {
        let mut buffer = Vec::new();
        cli::run(std::env::args_os(), io::stdin().lock(), &mut buffer).map(|()| buffer)
    })
    .unwrap_or_else(|_| Err(KMeansError::generic("panic during clustering")));

    match outcome.and_then(|buffer| emit(&buffer)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{err}: {}", err.detail());
            let _ = writeln!(io::stdout(), "{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn emit(buffer: &[u8]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(buffer)?;
    stdout.flush()?;
    Ok(())
}
