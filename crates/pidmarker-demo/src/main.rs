//! Keeps a PID marker next to the executable until Enter is pressed.
//!
//! Log level is controlled by the `RUST_LOG` environment variable (default: info).
//! `PIDMARKER_DIR` overrides the marker directory.

use std::io::{self, BufRead};

use pidmarker_core::{MarkerOptions, PidMarker};
use tracing::info;

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut marker = PidMarker::builder(MarkerOptions::new())
        .on_write_error(|_| println!("Stop program due to pid file write error."))
        .open()?;

    println!("{}", marker.pid());
    println!("{}", marker.path().display());

    info!("Press Enter to exit");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    marker.close();
    Ok(())
}
