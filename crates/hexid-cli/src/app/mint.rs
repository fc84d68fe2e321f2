use crate::app::config::{AppConfig, Source};
use anyhow::Context;
use std::io::Write;
use tracing::{debug, info, warn};

/// Seeds the process-wide generator, from `seed` or from OS entropy.
///
/// Call once at startup before any identifier is minted. If something already
/// seeded the generator the call is a no-op and a warning is logged.
pub fn seed_shared_generator(seed: Option<i64>) -> anyhow::Result<()> {
    let (seed, origin) = match seed {
        Some(seed) => (seed, "configured"),
        None => (
            hexid::secure_seed().context("reading a startup seed from OS entropy")?,
            "os-entropy",
        ),
    };

    if hexid::init_global_rand(seed) {
        info!(origin, "Seeded shared generator");
    } else {
        warn!(origin, "Shared generator was already seeded; startup seed ignored");
    }
    Ok(())
}

/// Mints `config.count` identifiers and writes them to `out`, one per line.
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> anyhow::Result<()> {
    match config.source {
        Source::Fast { seed } => seed_shared_generator(seed)?,
        Source::Secure => debug!("Reading identifiers from OS entropy"),
    }

    for _ in 0..config.count {
        let id = match config.source {
            Source::Fast { .. } => hexid::try_random_id(config.length)?,
            Source::Secure => hexid::secure_random_id(config.length)?,
        };
        writeln!(out, "{id}")?;
    }
    out.flush()?;
    Ok(())
}
