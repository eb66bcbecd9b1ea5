//! Core runtime for trimmer: the capability traits implemented by
//! `#[derive(Trim)]`, the mutable traversal, trace events, and the
//! `trim_strings` entry point.
#![warn(unreachable_pub)]

extern crate self as trimmer;

// public exports are one module level down
pub mod error;
pub mod obs;
pub mod traits;
pub mod trim;
pub mod visitor;

#[cfg(test)]
mod tests;

pub use error::TrimError;
pub use trim::{Trimmer, trim_strings};

///
/// Prelude
///
/// Prelude contains only the vocabulary needed to call the trimmer and to
/// write manual capability impls.
///

pub mod prelude {
    pub use crate::{
        error::TrimError,
        obs::{TraceEvent, TraceKind, TraceSink, TrimReport},
        traits::{Record, TextSlot, Trim},
        trim::{Trimmer, trim_strings},
        visitor::{
            Field, Node, PathSegment, VisitorMutCore, perform_field_mut, perform_field_other,
        },
    };
}
