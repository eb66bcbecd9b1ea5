use crate::{
    error::TrimError,
    traits::{TextSlot, Trim},
    visitor::{Node, VisitorMutCore},
};
use std::{
    any::type_name,
    borrow::Cow,
    cell::{Cell, RefCell},
    collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque},
    ffi::OsString,
    cmp::Reverse,
    marker::PhantomData,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    num::{
        NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize, Saturating, Wrapping,
    },
    ops::Range,
    path::PathBuf,
    rc::Rc,
    sync::{Arc, Mutex, PoisonError, TryLockError},
    time::{Duration, Instant, SystemTime},
};

// ============================================================================
// TEXT
// ============================================================================

impl TextSlot for String {
    fn text(&self) -> &str {
        self
    }

    fn retain_span(&mut self, span: Range<usize>) {
        self.truncate(span.end);
        self.drain(..span.start);
    }
}

impl TextSlot for Box<str> {
    fn text(&self) -> &str {
        self
    }

    fn retain_span(&mut self, span: Range<usize>) {
        *self = Self::from(&self[span]);
    }
}

impl TextSlot for Cow<'_, str> {
    fn text(&self) -> &str {
        self
    }

    fn retain_span(&mut self, span: Range<usize>) {
        match self {
            Cow::Borrowed(text) => {
                let text = *text;
                *self = Cow::Borrowed(&text[span]);
            }
            Cow::Owned(text) => text.retain_span(span),
        }
    }
}

impl<'a> TextSlot for &'a str {
    fn text(&self) -> &str {
        self
    }

    fn retain_span(&mut self, span: Range<usize>) {
        let text: &'a str = *self;
        *self = &text[span];
    }
}

impl_text!(String, Box<str>, Cow<'_, str>, &'_ str);

// ============================================================================
// INDIRECTION
// ============================================================================
//
// Every layer forwards to the value it wraps. Behind a shared handle only
// interior-mutable layers can hand out `&mut`; everything else reports
// `Node::Shared` so the traversal skips it.
//

impl<T: Trim> Trim for Option<T> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        match self {
            Some(inner) => inner.drive_mut(visitor),
            None => visitor.visit(Node::Absent),
        }
    }

    fn drive_shared(&self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        match self {
            Some(inner) => inner.drive_shared(visitor),
            None => visitor.visit(Node::Absent),
        }
    }
}

impl<T: Trim + ?Sized> Trim for Box<T> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        (**self).drive_mut(visitor)
    }

    fn drive_shared(&self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        (**self).drive_shared(visitor)
    }
}

impl<T: Trim + ?Sized> Trim for &mut T {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        (**self).drive_mut(visitor)
    }

    fn drive_shared(&self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        (**self).drive_shared(visitor)
    }
}

// `&str` has its own text impl above; `str` itself is never `Trim`.
impl<T: Trim + ?Sized> Trim for &T {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        (**self).drive_shared(visitor)
    }

    fn drive_shared(&self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        (**self).drive_shared(visitor)
    }
}

// Unique handles are mutated in place; aliased ones fall back to the
// shared path.
impl<T: Trim + ?Sized> Trim for Rc<T> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        match Rc::get_mut(self) {
            Some(inner) => inner.drive_mut(visitor),
            None => (**self).drive_shared(visitor),
        }
    }

    fn drive_shared(&self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        (**self).drive_shared(visitor)
    }
}

impl<T: Trim + ?Sized> Trim for Arc<T> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        match Arc::get_mut(self) {
            Some(inner) => inner.drive_mut(visitor),
            None => (**self).drive_shared(visitor),
        }
    }

    fn drive_shared(&self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        (**self).drive_shared(visitor)
    }
}

// A cell that is already borrowed is either held by the caller or is an
// ancestor of the current node (a reference cycle); both are skipped.
impl<T: Trim + ?Sized> Trim for RefCell<T> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        self.get_mut().drive_mut(visitor)
    }

    fn drive_shared(&self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        match self.try_borrow_mut() {
            Ok(mut inner) => inner.drive_mut(visitor),
            Err(_) => visitor.visit(Node::Shared),
        }
    }
}

// Poisoning is ignored: the walk holds the only handle while it trims.
// try_lock keeps the walk non-blocking; contended locks are skipped.
impl<T: Trim + ?Sized> Trim for Mutex<T> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        self.get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .drive_mut(visitor)
    }

    fn drive_shared(&self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        let mut inner = match self.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => return visitor.visit(Node::Shared),
        };

        inner.drive_mut(visitor)
    }
}

// ============================================================================
// LEAVES
// ============================================================================

impl_leaf!(
    (),
    bool,
    char,
    f32,
    f64,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
    Duration,
    Instant,
    SystemTime,
    IpAddr,
    Ipv4Addr,
    Ipv6Addr,
    SocketAddr,
    OsString,
    PathBuf,
);

#[cfg(feature = "time")]
impl_leaf!(
    time::Date,
    time::Duration,
    time::OffsetDateTime,
    time::PrimitiveDateTime,
    time::Time,
    time::UtcOffset,
);

// Containers are leaves: records held in collections are not traversed.

impl<T> Trim for [T] {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        visitor.visit(Node::Other(type_name::<Self>()))
    }
}

impl<T, const N: usize> Trim for [T; N] {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        visitor.visit(Node::Other(type_name::<Self>()))
    }
}

impl<T> Trim for Vec<T> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        visitor.visit(Node::Other(type_name::<Self>()))
    }
}

impl<T> Trim for VecDeque<T> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        visitor.visit(Node::Other(type_name::<Self>()))
    }
}

impl<T> Trim for LinkedList<T> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        visitor.visit(Node::Other(type_name::<Self>()))
    }
}

impl<T> Trim for BinaryHeap<T> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        visitor.visit(Node::Other(type_name::<Self>()))
    }
}

impl<T> Trim for BTreeSet<T> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        visitor.visit(Node::Other(type_name::<Self>()))
    }
}

impl<K, V> Trim for BTreeMap<K, V> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        visitor.visit(Node::Other(type_name::<Self>()))
    }
}

impl<T, S> Trim for HashSet<T, S> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        visitor.visit(Node::Other(type_name::<Self>()))
    }
}

impl<K, V, S> Trim for HashMap<K, V, S> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        visitor.visit(Node::Other(type_name::<Self>()))
    }
}

impl<T: ?Sized> Trim for PhantomData<T> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        visitor.visit(Node::Other(type_name::<Self>()))
    }
}

impl<T: ?Sized> Trim for Cell<T> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        visitor.visit(Node::Other(type_name::<Self>()))
    }
}

impl<T> Trim for Wrapping<T> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        visitor.visit(Node::Other(type_name::<Self>()))
    }
}

impl<T> Trim for Saturating<T> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        visitor.visit(Node::Other(type_name::<Self>()))
    }
}

impl<T> Trim for Reverse<T> {
    fn drive_mut(&mut self, visitor: &mut dyn VisitorMutCore) -> Result<(), TrimError> {
        visitor.visit(Node::Other(type_name::<Self>()))
    }
}

// Tuples are values, not records; their elements are never visited.
impl_leaf_tuple!(A);
impl_leaf_tuple!(A, B);
impl_leaf_tuple!(A, B, C);
impl_leaf_tuple!(A, B, C, D);
impl_leaf_tuple!(A, B, C, D, E);
impl_leaf_tuple!(A, B, C, D, E, F);
impl_leaf_tuple!(A, B, C, D, E, F, G);
impl_leaf_tuple!(A, B, C, D, E, F, G, H);
impl_leaf_tuple!(A, B, C, D, E, F, G, H, I);
impl_leaf_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_leaf_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_leaf_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
