use crate::{
    error::TrimError,
    obs::{TraceSink, TrimReport},
    traits::Trim,
    visitor::{TrimVisitor, VisitorMutAdapter},
};
use std::fmt;

///
/// trim_strings
/// Trim leading and trailing whitespace from every text field reachable
/// from `target`, recursing into nested records.
///
/// `target` must resolve to a record once indirection is unwrapped;
/// anything else fails with `TrimError::InvalidType` before any mutation.
///
pub fn trim_strings<T>(target: &mut T) -> Result<(), TrimError>
where
    T: Trim + ?Sized,
{
    Trimmer::new().trim(target).map(|_| ())
}

///
/// Trimmer
/// Configurable entry point. Returns a `TrimReport` and optionally
/// forwards every trace event to a caller-supplied sink.
///

#[derive(Clone, Copy, Default)]
pub struct Trimmer<'a> {
    sink: Option<&'a dyn TraceSink>,
}

impl<'a> Trimmer<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self { sink: None }
    }

    #[must_use]
    pub const fn with_sink(self, sink: &'a dyn TraceSink) -> Self {
        Self { sink: Some(sink) }
    }

    pub fn trim<T>(&self, target: &mut T) -> Result<TrimReport, TrimError>
    where
        T: Trim + ?Sized,
    {
        let mut adapter = VisitorMutAdapter::new(TrimVisitor::new()).with_sink(self.sink);
        target.drive_mut(&mut adapter)?;

        Ok(adapter.finish())
    }
}

impl fmt::Debug for Trimmer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trimmer")
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

///
/// TESTS
///
