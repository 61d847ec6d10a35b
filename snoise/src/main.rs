//! `snoise`: a command-line host for the `simplex~` noise object.
//!
//! Command-line arguments are the creation arguments
//! (`[-n] [-s seed] [octaves] [persistence]`). Control messages are read from
//! stdin, one per line. `render <channels> <frames> [step]` writes samples to
//! stdout, one per line. Diagnostics go to stderr.

mod render;

use std::env;
use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use snoise_core::command::{Message, parse_atoms};
use snoise_core::object::SimplexTilde;
use tracing_subscriber::EnvFilter;

use crate::render::{RenderRequest, render};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let args = env::args().skip(1).collect::<Vec<_>>().join(" ");
    let mut object = SimplexTilde::new(&parse_atoms(&args));
    tracing::info!(
        "simplex~ ready: {} octave(s), persistence {}",
        object.engine().octave_config().octaves(),
        object.persistence()
    );

    let mut stdout = BufWriter::new(io::stdout().lock());
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read control message")?;
        let Some(message) = Message::parse(&line) else {
            continue;
        };

        if message.selector == "render" {
            match RenderRequest::parse(&message.args) {
                Ok(request) => {
                    render(&object, &request, &mut stdout).context("failed to write samples")?;
                    stdout.flush().context("failed to write samples")?;
                }
                Err(err) => tracing::warn!("{err}"),
            }
        } else {
            // The object logs its own diagnostics.
            let _ = object.handle(&message);
        }
    }

    stdout.flush().context("failed to write samples")?;
    Ok(())
}
