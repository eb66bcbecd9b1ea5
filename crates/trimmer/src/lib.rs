//! Derive-driven whitespace trimming for nested records.
//!
//! ## Crate layout
//! - `error`: the single `TrimError` returned by the trimmer.
//! - `obs`: trace sink boundary and the per-run `TrimReport`.
//! - `traits`: capability traits implemented by `#[derive(Trim)]`.
//! - `visitor`: the mutable traversal driving those traits.
//!
//! ```ignore
//! use trimmer::prelude::*;
//!
//! #[derive(Trim)]
//! struct Signup {
//!     email: String,
//!     #[trim(skip)]
//!     password: String,
//! }
//!
//! trim_strings(&mut signup)?;
//! ```

pub use trimmer_core::{error, obs, traits, visitor};

#[cfg(feature = "derive")]
pub use trimmer_derive::Trim;

pub use trimmer_core::{TrimError, Trimmer, trim_strings};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use trimmer_core::prelude::*;

    #[cfg(feature = "derive")]
    pub use trimmer_derive::Trim;
}
