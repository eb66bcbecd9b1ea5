#[macro_use]
mod macros;
mod impls;

use crate::{
    error::TrimError,
    visitor::{Node, VisitorMutCore},
};
use std::ops::Range;

// ============================================================================
// CAPABILITIES
// ============================================================================
//
// These traits replace runtime reflection. `#[derive(Trim)]` implements
// them for application records; blanket impls in this module cover text,
// indirection, and every leaf type the traversal must leave alone.
//

///
/// Trim
///
/// Resolve `self` through any indirection layers and hand the node that
/// sits underneath to the visitor.
///
/// ## Rules
/// - Indirection layers (`Option`, `Box`, `&mut`, `RefCell`, ...) forward
///   to the wrapped value and must not call `visit` themselves
/// - A missing layer reports `Node::Absent`
/// - A layer that cannot hand out `&mut` reports `Node::Shared`
/// - Everything else reports exactly one node
///
/// `drive_shared` is the same walk entered through a shared handle
/// (`&T`, an aliased `Rc`/`Arc`). Wrappers forward it; `RefCell` and
/// `Mutex` turn it back into a mutable walk.
///

pub trait Trim {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError>;

    fn drive_shared(&self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        visitor.visit(Node::Shared)
    }
}

///
/// Record
///
/// A structured value whose fields are traversed in declaration order.
/// Implementations call `perform_field_mut` once per field and propagate
/// the first error.
///

pub trait Record {
    fn drive_fields(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError>;
}

///
/// TextSlot
///
/// Accessor pair for a textual value. `retain_span` keeps the byte range
/// `span` of the current text and drops the rest; `span` always lies on
/// char boundaries of `text()`.
///

pub trait TextSlot {
    fn text(&self) -> &str;

    fn retain_span(&mut self, span: Range<usize>);
}
