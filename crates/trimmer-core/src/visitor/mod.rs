pub mod trim;

pub use trim::*;

use crate::{
    error::TrimError,
    obs::{TraceEvent, TraceKind, TraceSink, TrimReport},
    traits::{Record, TextSlot, Trim},
};
use derive_more::Display;
use std::fmt::Write;

// ============================================================================
// Node
// ============================================================================

///
/// Node
/// What a value resolved to once every indirection layer was unwrapped.
///

pub enum Node<'a> {
    Text(&'a mut dyn TextSlot),
    Record(&'a mut dyn Record),
    Other(&'static str),
    Absent,
    Shared,
}

impl Node<'_> {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Text(_) => NodeKind::Text,
            Self::Record(_) => NodeKind::Record,
            Self::Other(_) => NodeKind::Other,
            Self::Absent => NodeKind::Absent,
            Self::Shared => NodeKind::Shared,
        }
    }
}

///
/// NodeKind
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum NodeKind {
    #[display("absent reference")]
    Absent,

    #[display("non-text value")]
    Other,

    #[display("record")]
    Record,

    #[display("shared reference")]
    Shared,

    #[display("text")]
    Text,
}

// ============================================================================
// Path
// ============================================================================

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathSegment {
    Field(&'static str),
    Index(usize),
}

///
/// Field
/// Declaration-time facts about a record field.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Field {
    pub segment: PathSegment,

    /// Set by `#[trim(skip)]`; only consulted for text.
    pub skip: bool,
}

impl Field {
    #[must_use]
    pub const fn new(segment: PathSegment, skip: bool) -> Self {
        Self { segment, skip }
    }

    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self::new(PathSegment::Field(name), false)
    }

    #[must_use]
    pub const fn indexed(index: usize) -> Self {
        Self::new(PathSegment::Index(index), false)
    }

    /// Mark the field `#[trim(skip)]`.
    #[must_use]
    pub const fn skipped(self) -> Self {
        Self::new(self.segment, true)
    }
}

fn render_path(fields: &[Field]) -> String {
    let mut out = String::new();

    for field in fields {
        match field.segment {
            PathSegment::Field(name) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(name);
            }
            PathSegment::Index(i) => {
                let _ = write!(out, "[{i}]");
            }
        }
    }

    out
}

// ============================================================================
// VisitorContext
// ============================================================================

/// Narrow interface exposed to visitors for reporting what happened at the
/// current node. Implemented by the adapter via a short-lived context object.
pub trait VisitorContext {
    fn note(&mut self, kind: TraceKind);
}

// ============================================================================
// VisitorMut
// ============================================================================

pub trait VisitorMut {
    fn visit_text(&mut self, text: &mut dyn TextSlot, field: Field, ctx: &mut dyn VisitorContext);
}

// ============================================================================
// VisitorMutCore (object-safe traversal)
// ============================================================================

/// The surface generated `Trim` and `Record` impls talk to.
pub trait VisitorMutCore {
    fn visit(&mut self, node: Node<'_>) -> Result<(), TrimError>;

    fn enter_field(&mut self, _: Field) {}
    fn exit_field(&mut self) {}
}

// ============================================================================
// Internal adapter context (fixes borrow checker)
// ============================================================================

struct AdapterContext<'a> {
    fields: &'a [Field],
    report: &'a mut TrimReport,
    sink: Option<&'a dyn TraceSink>,
}

impl VisitorContext for AdapterContext<'_> {
    fn note(&mut self, kind: TraceKind) {
        let path = render_path(self.fields);

        self.report.apply(&path, kind);
        if let Some(sink) = self.sink {
            sink.on_event(TraceEvent { path: &path, kind });
        }
    }
}

// ============================================================================
// VisitorMutAdapter
// ============================================================================

///
/// VisitorMutAdapter
///
/// Owns the traversal: field stack, entry validation, recursion into
/// records, and routing of trace notes. The wrapped `VisitorMut` only
/// decides what happens to text.
///

pub struct VisitorMutAdapter<'a, V> {
    visitor: V,
    fields: Vec<Field>,
    report: TrimReport,
    sink: Option<&'a dyn TraceSink>,
}

impl<'a, V> VisitorMutAdapter<'a, V>
where
    V: VisitorMut,
{
    pub const fn new(visitor: V) -> Self {
        Self {
            visitor,
            fields: Vec::new(),
            report: TrimReport::new(),
            sink: None,
        }
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Option<&'a dyn TraceSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn finish(self) -> TrimReport {
        self.report
    }

    fn note(&mut self, kind: TraceKind) {
        AdapterContext {
            fields: &self.fields,
            report: &mut self.report,
            sink: self.sink,
        }
        .note(kind);
    }

    // The value handed to the trimmer must resolve to a record.
    fn visit_root(&mut self, node: Node<'_>) -> Result<(), TrimError> {
        match node {
            Node::Record(record) => self.visit_record(record),
            other => Err(TrimError::invalid_type(other.kind())),
        }
    }

    fn visit_record(&mut self, record: &mut dyn Record) -> Result<(), TrimError> {
        self.note(TraceKind::RecordEntered);

        record.drive_fields(self)
    }
}

impl<V> VisitorMutCore for VisitorMutAdapter<'_, V>
where
    V: VisitorMut,
{
    fn visit(&mut self, node: Node<'_>) -> Result<(), TrimError> {
        let Some(field) = self.fields.last().copied() else {
            return self.visit_root(node);
        };

        match node {
            Node::Text(text) => {
                let mut ctx = AdapterContext {
                    fields: &self.fields,
                    report: &mut self.report,
                    sink: self.sink,
                };
                self.visitor.visit_text(text, field, &mut ctx);
            }
            Node::Record(record) => self.visit_record(record)?,
            Node::Other(type_name) => self.note(TraceKind::OtherSkipped { type_name }),
            Node::Absent => self.note(TraceKind::ReferenceAbsent),
            Node::Shared => self.note(TraceKind::ReferenceShared),
        }

        Ok(())
    }

    fn enter_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    fn exit_field(&mut self) {
        self.fields.pop();
    }
}

// ============================================================================
// Traversal
// ============================================================================

/// Visit one record field. Generated `Record` impls call this once per
/// field, in declaration order, and stop at the first error.
pub fn perform_field_mut(
    visitor: &mut dyn VisitorMutCore,
    field: Field,
    value: &mut dyn Trim,
) -> Result<(), TrimError> {
    visitor.enter_field(field);
    let result = value.drive_mut(visitor);
    visitor.exit_field();

    result
}

/// Report a field declared `#[trim(opaque)]` without requiring its type to
/// implement `Trim`.
pub fn perform_field_other(
    visitor: &mut dyn VisitorMutCore,
    field: Field,
    type_name: &'static str,
) -> Result<(), TrimError> {
    visitor.enter_field(field);
    let result = visitor.visit(Node::Other(type_name));
    visitor.exit_field();

    result
}

///
/// TESTS
///
