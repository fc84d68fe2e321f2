//! The process-wide shared generator.
//!
//! [`RandomState`] moves through exactly two states, `Uninitialized` and
//! `Initialized`. The transition happens once, on the first explicit
//! [`RandomState::initialize`] or the first [`RandomState::try_handle`],
//! whichever wins the one-time gate. After that the seed is never replaced.
//!
//! Every draw locks the generator for one `next_u32` call and nothing else.
//! Identifier assembly and hex encoding happen outside the lock, so under
//! concurrent load the words of one identifier need not be adjacent in the
//! global draw order. Each word is still drawn whole.

use crate::{Result, WordSource, mutex::Mutex, secure_seed};
use core::fmt;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::OnceLock;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// The PRNG behind the fast path.
///
/// ChaCha8 is value-stable across releases, so a fixed seed yields the same
/// identifiers on every platform and version. It is **not** a secret: anyone
/// who learns the seed or enough output can predict the rest.
pub type Generator = ChaCha8Rng;

static GLOBAL_RANDOM_STATE: RandomState = RandomState::new();

/// Returns the process-wide [`RandomState`].
///
/// It is created on first touch and lives until the process exits.
pub fn global() -> &'static RandomState {
    &GLOBAL_RANDOM_STATE
}

/// Seeds the process-wide generator.
///
/// Only the first initialization in lock-acquisition order takes effect,
/// whether it comes from here or from lazy seeding. Later calls are silent
/// no-ops. Returns `true` if this call performed the initialization.
///
/// # Example
/// ```
/// hexid::init_global_rand(42);
/// // A second seed is ignored.
/// assert!(!hexid::init_global_rand(7));
/// ```
pub fn init_global_rand(seed: i64) -> bool {
    global().initialize(seed)
}

/// A lazily seeded generator shared behind a mutex.
///
/// Most callers want the process-wide instance from [`global`]. Separate
/// instances exist for tests and for callers that need an isolated,
/// reproducible stream.
pub struct RandomState {
    rng: OnceLock<Mutex<Generator>>,
}

impl RandomState {
    /// Creates an uninitialized state.
    pub const fn new() -> Self {
        Self {
            rng: OnceLock::new(),
        }
    }

    /// Creates a state that is already seeded with `seed`.
    pub fn with_seed(seed: i64) -> Self {
        let state = Self::new();
        state.initialize(seed);
        state
    }

    /// Seeds the generator unless it is already seeded.
    ///
    /// Safe to race: exactly one initializer runs, every other caller waits
    /// for it and then returns `false`. The seed is consumed and not retained.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
    pub fn initialize(&self, seed: i64) -> bool {
        let mut won = false;
        self.rng.get_or_init(|| {
            won = true;
            seeded(seed)
        });
        #[cfg(feature = "tracing")]
        if won {
            tracing::debug!("shared generator seeded explicitly");
        } else {
            tracing::trace!("shared generator already seeded; ignoring seed");
        }
        won
    }

    /// Returns `true` once the generator has been seeded.
    pub fn is_initialized(&self) -> bool {
        self.rng.get().is_some()
    }

    /// Returns a handle to the shared generator, seeding it from the OS on
    /// first use.
    ///
    /// The lazy path goes through the same one-time gate as
    /// [`Self::initialize`]: if an explicit seed lands first, the secure seed
    /// fetched here is dropped.
    ///
    /// # Errors
    /// Returns [`crate::Error::Entropy`] if the state is uninitialized and no
    /// secure seed can be read. The state stays uninitialized, so a later
    /// call may retry. There is no fallback to a fixed seed.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_handle(&self) -> Result<GeneratorHandle<'_>> {
        self.try_handle_with(secure_seed)
    }

    /// [`Self::try_handle`] with the lazy seed drawn from `seed_source`.
    ///
    /// `seed_source` runs only while the state looks uninitialized. If it
    /// fails but another caller finished seeding in the meantime, that
    /// generator is returned instead of the error.
    pub(crate) fn try_handle_with<F>(&self, seed_source: F) -> Result<GeneratorHandle<'_>>
    where
        F: FnOnce() -> Result<i64>,
    {
        if let Some(rng) = self.rng.get() {
            return Ok(GeneratorHandle { rng });
        }

        let seed = match seed_source() {
            Ok(seed) => seed,
            Err(err) => {
                if let Some(rng) = self.rng.get() {
                    return Ok(GeneratorHandle { rng });
                }
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, "lazy seeding of shared generator failed");
                return Err(err);
            }
        };
        let rng = self.rng.get_or_init(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!("shared generator seeded lazily from OS entropy");
            seeded(seed)
        });
        Ok(GeneratorHandle { rng })
    }

    /// Infallible version of [`Self::try_handle`].
    ///
    /// # Panics
    /// Panics if lazy seeding cannot read OS entropy.
    pub fn handle(&self) -> GeneratorHandle<'_> {
        self.try_handle()
            .unwrap_or_else(|err| panic!("cannot seed shared generator: {err}"))
    }
}

impl Default for RandomState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RandomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomState")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

fn seeded(seed: i64) -> Mutex<Generator> {
    // Reinterpret the bits; negative seeds are as good as positive ones.
    Mutex::new(Generator::seed_from_u64(seed as u64))
}

/// A borrowed handle to a seeded [`RandomState`].
///
/// Cheap to copy. Each [`WordSource::try_next_word`] call holds the lock for
/// a single draw.
#[derive(Clone, Copy)]
pub struct GeneratorHandle<'a> {
    rng: &'a Mutex<Generator>,
}

impl fmt::Debug for GeneratorHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorHandle").finish_non_exhaustive()
    }
}

impl WordSource for GeneratorHandle<'_> {
    fn try_next_word(&self) -> Result<u32> {
        #[cfg(not(feature = "parking-lot"))]
        let mut rng = self.rng.lock()?;
        #[cfg(feature = "parking-lot")]
        let mut rng = self.rng.lock();
        Ok(rng.next_u32())
    }
}
