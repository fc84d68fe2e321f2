//! # `hexid-cli`
//!
//! The startup layer around [`hexid`]. It resolves configuration from flags,
//! the environment and `.env`, seeds the process-wide generator exactly once,
//! and prints identifiers one per line.
//!
//! ## Usage
//!
//! ```bash
//! # Four 8-byte labels from a fresh OS seed
//! hexid --count 4
//!
//! # Reproducible labels for a fixture
//! HEXID_SEED=42 hexid --length 4
//!
//! # A 16-byte token straight from OS entropy
//! hexid --secure --length 16
//! ```
//!
//! Logs go to stderr and are filtered with `RUST_LOG` (default `info`).

pub mod app;
