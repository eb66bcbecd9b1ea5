// impl_leaf
// types that are never traversed, even when they are internally made of fields
macro_rules! impl_leaf {
    ($($type:ty),* $(,)?) => {
        $(
            impl $crate::traits::Trim for $type {
                fn drive_mut(
                    &mut self,
                    visitor: &mut dyn $crate::visitor::VisitorMutCore,
                ) -> Result<(), $crate::error::TrimError> {
                    visitor.visit($crate::visitor::Node::Other(::std::any::type_name::<Self>()))
                }
            }
        )*
    };
}

// impl_text
macro_rules! impl_text {
    ($($type:ty),* $(,)?) => {
        $(
            impl $crate::traits::Trim for $type {
                fn drive_mut(
                    &mut self,
                    visitor: &mut dyn $crate::visitor::VisitorMutCore,
                ) -> Result<(), $crate::error::TrimError> {
                    visitor.visit($crate::visitor::Node::Text(self))
                }
            }
        )*
    };
}

// impl_leaf_tuple
macro_rules! impl_leaf_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> $crate::traits::Trim for ($($name,)+) {
            fn drive_mut(
                &mut self,
                visitor: &mut dyn $crate::visitor::VisitorMutCore,
            ) -> Result<(), $crate::error::TrimError> {
                visitor.visit($crate::visitor::Node::Other(::std::any::type_name::<Self>()))
            }
        }
    };
}
