use crate::{
    obs::TraceKind,
    traits::TextSlot,
    visitor::{Field, VisitorContext, VisitorMut},
};

///
/// TrimVisitor
/// Strips leading and trailing Unicode whitespace from every text node
/// whose field is not marked `#[trim(skip)]`.
///

#[derive(Debug, Default)]
pub struct TrimVisitor;

impl TrimVisitor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl VisitorMut for TrimVisitor {
    fn visit_text(&mut self, text: &mut dyn TextSlot, field: Field, ctx: &mut dyn VisitorContext) {
        if field.skip {
            ctx.note(TraceKind::TextExcluded);
            return;
        }

        let current = text.text();
        let end = current.trim_end().len();
        let start = end - current[..end].trim_start().len();

        if start == 0 && end == current.len() {
            ctx.note(TraceKind::TextUnchanged);
            return;
        }

        let removed = current.len() - (end - start);
        let span = start..end;

        text.retain_span(span);
        ctx.note(TraceKind::TextTrimmed { removed });
    }
}
