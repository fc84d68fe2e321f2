use crate::{Result, fill_secure};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Creates a `2 * len` character hex id straight from OS entropy.
///
/// Nothing is shared with the seeded generator and nothing is locked, so this
/// is safe for credentials and capability tokens. A zero `len` returns an
/// empty string without reading.
///
/// # Errors
/// Returns [`crate::Error::Entropy`] if fewer than `len` bytes could be read.
///
/// # Example
/// ```
/// let token = hexid::secure_random_id(16).expect("OS entropy available");
/// assert_eq!(token.len(), 32);
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn secure_random_id(len: usize) -> Result<String> {
    secure_random_id_with(len, fill_secure)
}

/// [`secure_random_id`] reading its bytes through `fill`.
pub(crate) fn secure_random_id_with<F>(len: usize, fill: F) -> Result<String>
where
    F: FnOnce(&mut [u8]) -> Result<()>,
{
    if len == 0 {
        return Ok(String::new());
    }
    let mut bytes = vec![0u8; len];
    fill(&mut bytes)?;
    Ok(hex::encode(bytes))
}

/// Like [`secure_random_id`], but treats missing entropy as fatal.
///
/// Only for call sites where running without OS entropy means the
/// environment is unsafe and there is nothing sensible to recover to.
///
/// # Panics
/// Panics if the OS entropy source fails.
pub fn secure_random_id_or_panic(len: usize) -> String {
    secure_random_id_or_panic_with(len, fill_secure)
}

pub(crate) fn secure_random_id_or_panic_with<F>(len: usize, fill: F) -> String
where
    F: FnOnce(&mut [u8]) -> Result<()>,
{
    secure_random_id_with(len, fill)
        .unwrap_or_else(|err| panic!("secure random id unavailable: {err}"))
}
