use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Print one JSON feature object per URL.
///
/// URLs are taken from the command line, or read line by line from stdin
/// when no arguments are given.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.is_empty() {
        tracing::debug!("reading URLs from stdin");
        for line in io::stdin().lock().lines() {
            let line = line?;
            write_features(&mut out, &line)?;
        }
    } else {
        for url in &args {
            write_features(&mut out, url)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn write_features(out: &mut impl Write, url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let features = urlfeat::extract(url);
    serde_json::to_writer(&mut *out, &features)?;
    writeln!(out)?;
    Ok(())
}
