use rand::rand_core::OsError;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `hexid` can emit.
///
/// Only two things can go wrong: the operating system refuses to hand out
/// entropy, or (with std mutexes) a thread panicked while holding the shared
/// generator. The fast path never fails once the shared generator exists.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The OS entropy source was unavailable or returned fewer bytes than
    /// requested.
    #[error("failed to read {requested} bytes from the OS entropy source")]
    Entropy {
        /// Number of bytes asked for.
        requested: usize,
        /// The underlying OS error, if the source reported one.
        #[source]
        source: Option<OsError>,
    },

    /// The operation failed because the lock was **poisoned**.
    ///
    /// This occurs when a thread panics while holding the lock. When the
    /// `parking-lot` feature is enabled, mutexes do **not** poison, so this
    /// variant is never produced.
    #[error("the shared generator lock is poisoned")]
    LockPoisoned,
}

#[cfg(not(feature = "parking-lot"))]
use crate::mutex::{MutexGuard, PoisonError};
#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
