use crate::app::version;
use anyhow::bail;
use clap::Parser;

/// Largest identifier, in bytes, the CLI will mint.
pub const MAX_ID_LENGTH: usize = 4096;

/// Command-line and environment configuration for the `hexid` binary.
///
/// Every value can come from a flag or an environment variable; a `.env` file
/// in the working directory is loaded first.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "hexid",
    version = version::FULL.as_str(),
    about = "Mint random hex identifiers from a seeded or OS-entropy source"
)]
pub struct CliArgs {
    /// Seed for the shared fast generator.
    ///
    /// The same seed and the same flags print the same identifiers. When
    /// omitted, a seed is read from the OS entropy source at startup.
    ///
    /// Environment variable: `HEXID_SEED`
    #[arg(long, env = "HEXID_SEED", allow_hyphen_values = true)]
    pub seed: Option<i64>,

    /// Identifier size in bytes. Each identifier prints as twice as many hex
    /// characters.
    ///
    /// Environment variable: `HEXID_LENGTH`
    #[arg(short, long, env = "HEXID_LENGTH", default_value_t = 8)]
    pub length: usize,

    /// Number of identifiers to print, one per line.
    ///
    /// Environment variable: `HEXID_COUNT`
    #[arg(short = 'n', long, env = "HEXID_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Read every identifier straight from OS entropy instead of the shared
    /// generator. Use this for tokens that must not be guessable.
    #[arg(short, long, default_value_t = false)]
    pub secure: bool,

    /// Refuse to run unless this binary's full version (`--version`) matches.
    ///
    /// Environment variable: `HEXID_EXPECT_VERSION`
    #[arg(long, env = "HEXID_EXPECT_VERSION")]
    pub expect_version: Option<String>,
}

/// Which generator the identifiers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The shared generator, seeded with `seed` or from the OS when `None`.
    Fast { seed: Option<i64> },
    /// Direct OS entropy reads.
    Secure,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source: Source,
    pub length: usize,
    pub count: usize,
}

impl TryFrom<CliArgs> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("HEXID_COUNT must be greater than 0");
        }

        if args.length > MAX_ID_LENGTH {
            bail!(
                "HEXID_LENGTH ({}) exceeds the maximum identifier size ({MAX_ID_LENGTH} bytes)",
                args.length
            );
        }

        if let Some(expected) = &args.expect_version {
            if !version::compat(expected, version::FULL.as_str()) {
                bail!(
                    "HEXID_EXPECT_VERSION ({expected}) does not match this binary ({})",
                    version::FULL.as_str()
                );
            }
        }

        let source = match (args.secure, args.seed) {
            (true, Some(_)) => bail!("HEXID_SEED has no effect together with --secure"),
            (true, None) => Source::Secure,
            (false, seed) => Source::Fast { seed },
        };

        Ok(Self {
            source,
            length: args.length,
            count: args.count,
        })
    }
}
