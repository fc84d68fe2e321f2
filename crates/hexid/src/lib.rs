//! Random hex identifiers, two ways.
//!
//! - [`random_id`] draws from one process-wide ChaCha8 generator. It is fast
//!   and reproducible for a given seed, which makes it right for labels and
//!   wrong for secrets.
//! - [`secure_random_id`] reads the OS entropy source on every call and
//!   shares no state with anything.
//!
//! ```
//! // Seed once at startup; otherwise the first id seeds from the OS.
//! let seed = hexid::secure_seed()?;
//! hexid::init_global_rand(seed);
//!
//! let conn_id = hexid::random_id(8);
//! let auth_token = hexid::secure_random_id(16)?;
//! assert_eq!(conn_id.len(), 16);
//! assert_eq!(auth_token.len(), 32);
//! # Ok::<(), hexid::Error>(())
//! ```

mod entropy;
mod error;
mod fast;
mod mutex;
mod secure;
mod source;
mod state;

pub use crate::entropy::*;
pub use crate::error::*;
pub use crate::fast::*;
pub use crate::secure::*;
pub use crate::source::*;
pub use crate::state::*;
