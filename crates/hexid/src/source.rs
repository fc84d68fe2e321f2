use crate::Result;

/// A source of 32-bit words that identifiers are assembled from.
///
/// The shared [`GeneratorHandle`] is the production implementation. Tests plug
/// in fixed or counting sources to check how words are laid out in an id.
///
/// # Example
/// ```
/// use hexid::{Result, WordSource, random_id_from};
///
/// struct FixedWord;
/// impl WordSource for FixedWord {
///     fn try_next_word(&self) -> Result<u32> {
///         Ok(0x0403_0201)
///     }
/// }
///
/// assert_eq!(random_id_from(&FixedWord, 4).unwrap(), "01020304");
/// ```
///
/// [`GeneratorHandle`]: crate::GeneratorHandle
pub trait WordSource {
    /// Returns the next word.
    fn try_next_word(&self) -> Result<u32>;
}
