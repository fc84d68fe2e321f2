use crate::{Error, Result};
use rand::{TryRngCore, rngs::OsRng};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Fills `buf` from the operating system's secure entropy source.
///
/// This may block briefly early in boot while the OS pool is still being
/// seeded. It never falls back to a weaker source.
///
/// # Errors
/// Returns [`Error::Entropy`] if the OS source is unavailable or cannot fill
/// the whole buffer.
pub fn fill_secure(buf: &mut [u8]) -> Result<()> {
    OsRng.try_fill_bytes(buf).map_err(|source| Error::Entropy {
        requested: buf.len(),
        source: Some(source),
    })
}

/// Reads 8 bytes of OS entropy and interprets them as a little-endian `i64`.
///
/// This is the seed the shared generator uses when nobody calls
/// [`init_global_rand`] first, and what a startup layer should pass to it.
///
/// # Errors
/// Returns [`Error::Entropy`] if the OS source cannot supply 8 bytes.
///
/// # Example
/// ```
/// let seed = hexid::secure_seed().expect("OS entropy available");
/// hexid::init_global_rand(seed);
/// ```
///
/// [`init_global_rand`]: crate::init_global_rand
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn secure_seed() -> Result<i64> {
    let mut bytes = [0u8; 8];
    fill_secure(&mut bytes)?;
    Ok(i64::from_le_bytes(bytes))
}
