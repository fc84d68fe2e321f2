use clap::Parser;
use hexid_cli::app::{
    config::{AppConfig, CliArgs},
    mint::run,
    telemetry::init_telemetry,
    version,
};

// mimalloc: musl's allocator is slow for the many small id strings.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = AppConfig::try_from(args)?;

    init_telemetry()?;
    log_startup_info(&config);

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    run(&config, &mut out)
}

fn log_startup_info(config: &AppConfig) {
    tracing::info!(
        release = %version::major_minor(),
        protocol = version::PROTO,
        "hexid starting"
    );
    if cfg!(debug_assertions) {
        tracing::debug!(
            "Starting hexid {} with full config: {:#?}",
            version::FULL.as_str(),
            config
        );
    } else {
        tracing::debug!(
            "Starting hexid {} minting {} ids of {} bytes",
            version::FULL.as_str(),
            config.count,
            config.length
        );
    }
}
