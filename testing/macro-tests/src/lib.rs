//! Fixture records for `#[derive(Trim)]`, exercised through the public
//! `trimmer` facade the way a downstream crate would use it.

pub mod account;
pub mod stamp;

///
/// Prelude
///

pub(crate) mod prelude {
    pub use serde::{Deserialize, Serialize};
    pub use trimmer::prelude::*;
}
