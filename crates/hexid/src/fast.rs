use crate::{Result, WordSource, global};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Builds a `2 * len` character lowercase hex id from `source`.
///
/// Each 32-bit word supplies up to four bytes, low byte first. When `len` is
/// not a multiple of four, the last word contributes only its low bytes and
/// the rest are discarded.
///
/// # Errors
/// Propagates any error from `source`.
pub fn random_id_from<S>(source: &S, len: usize) -> Result<String>
where
    S: WordSource + ?Sized,
{
    let mut bytes = vec![0u8; len];
    for chunk in bytes.chunks_mut(4) {
        let word = source.try_next_word()?.to_le_bytes();
        chunk.copy_from_slice(&word[..chunk.len()]);
    }
    Ok(hex::encode(bytes))
}

/// Creates a `2 * len` character hex id from the process-wide generator.
///
/// For a fixed seed and a fixed sequence of lengths with no other callers in
/// between, the output is exactly reproducible. That makes these ids fine for
/// connection or session labels and **unsuitable** for anything that must
/// not be guessed, such as auth tokens. Use [`crate::secure_random_id`] for
/// those.
///
/// A zero `len` returns an empty string without touching the generator.
///
/// # Errors
/// Returns [`crate::Error::Entropy`] if the generator has to seed itself and
/// the OS entropy source fails, or [`crate::Error::LockPoisoned`] with std
/// mutexes after a panic mid-draw.
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn try_random_id(len: usize) -> Result<String> {
    if len == 0 {
        return Ok(String::new());
    }
    random_id_from(&global().try_handle()?, len)
}

/// Infallible version of [`try_random_id`].
///
/// # Panics
/// Panics if lazy seeding fails or the generator lock is poisoned. Seed the
/// generator at startup with [`crate::init_global_rand`] to rule out the
/// former.
///
/// # Example
/// ```
/// let id = hexid::random_id(8);
/// assert_eq!(id.len(), 16);
/// ```
pub fn random_id(len: usize) -> String {
    try_random_id(len).unwrap_or_else(|err| panic!("cannot create random id: {err}"))
}
