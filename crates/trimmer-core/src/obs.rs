//! Trace boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect traversal
//! semantics. The adapter always folds events into a `TrimReport`; a
//! `TraceSink` additionally receives each event as it happens.

use serde::{Deserialize, Serialize};

///
/// TraceSink
///

pub trait TraceSink {
    fn on_event(&self, event: TraceEvent<'_>);
}

impl<F> TraceSink for F
where
    F: Fn(TraceEvent<'_>),
{
    fn on_event(&self, event: TraceEvent<'_>) {
        self(event);
    }
}

///
/// TraceEvent
/// `path` is the rendered field path, e.g. `middle.inner1.field1` or
/// `pair[0]`; the root record has the empty path.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TraceEvent<'a> {
    pub path: &'a str,
    pub kind: TraceKind,
}

///
/// TraceKind
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraceKind {
    OtherSkipped { type_name: &'static str },
    RecordEntered,
    ReferenceAbsent,
    ReferenceShared,
    TextExcluded,
    TextTrimmed { removed: usize },
    TextUnchanged,
}

///
/// TrimReport
/// Summary of one trimmer run.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TrimReport {
    /// Paths of text fields that were shortened, in visit order.
    pub trimmed: Vec<String>,
    pub bytes_removed: u64,
    pub records: u64,
    pub unchanged: u64,
    pub excluded: u64,
    pub absent: u64,
    pub shared: u64,
    pub other: u64,
}

impl TrimReport {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            trimmed: Vec::new(),
            bytes_removed: 0,
            records: 0,
            unchanged: 0,
            excluded: 0,
            absent: 0,
            shared: 0,
            other: 0,
        }
    }

    /// True when no text was changed.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.trimmed.is_empty()
    }

    pub(crate) fn apply(&mut self, path: &str, kind: TraceKind) {
        match kind {
            TraceKind::OtherSkipped { .. } => self.other += 1,
            TraceKind::RecordEntered => self.records += 1,
            TraceKind::ReferenceAbsent => self.absent += 1,
            TraceKind::ReferenceShared => self.shared += 1,
            TraceKind::TextExcluded => self.excluded += 1,
            TraceKind::TextTrimmed { removed } => {
                self.trimmed.push(path.to_string());
                let removed = u64::try_from(removed).unwrap_or(u64::MAX);
                self.bytes_removed = self.bytes_removed.saturating_add(removed);
            }
            TraceKind::TextUnchanged => self.unchanged += 1,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_folds_events_into_counters() {
        let mut report = TrimReport::new();

        report.apply("", TraceKind::RecordEntered);
        report.apply("name", TraceKind::TextTrimmed { removed: 3 });
        report.apply("bio", TraceKind::TextTrimmed { removed: 1 });
        report.apply("age", TraceKind::OtherSkipped { type_name: "u8" });
        report.apply("password", TraceKind::TextExcluded);

        assert_eq!(report.trimmed, ["name", "bio"]);
        assert_eq!(report.bytes_removed, 4);
        assert_eq!(report.records, 1);
        assert_eq!(report.other, 1);
        assert_eq!(report.excluded, 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn bytes_removed_saturates() {
        let mut report = TrimReport {
            bytes_removed: u64::MAX - 1,
            ..TrimReport::new()
        };

        report.apply("name", TraceKind::TextTrimmed { removed: 5 });

        assert_eq!(report.bytes_removed, u64::MAX);
    }
}
