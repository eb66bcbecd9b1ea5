use crate::{
    node::{Shape, TrimField, TrimInput},
    util::with_type_param_bound,
};
use darling::{FromDeriveInput, ast::Fields};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Index, ext::IdentExt, parse_quote};

// derive_trim
pub fn derive_trim(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let node = match TrimInput::from_derive_input(&input) {
        Ok(node) => node,
        Err(err) => return err.write_errors(),
    };

    match node.shape() {
        Ok(Shape::Record(fields)) => record_tokens(&node, fields),
        Ok(Shape::Text(inner)) => text_tokens(&node, inner),
        Ok(Shape::Opaque) => opaque_tokens(&node),
        Err(err) => err.write_errors(),
    }
}

///
/// Record
/// Visit every field in declaration order, stopping at the first error.
///

fn record_tokens(node: &TrimInput, fields: &Fields<TrimField>) -> TokenStream {
    let ident = &node.ident;
    let generics = with_type_param_bound(&node.generics, &quote!(::trimmer::traits::Trim));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let visits: Vec<TokenStream> = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let (member, mut field_meta) = match &field.ident {
                Some(field_ident) => {
                    let name = field_ident.unraw().to_string();
                    (
                        quote!(#field_ident),
                        quote!(::trimmer::visitor::Field::named(#name)),
                    )
                }
                None => {
                    let member = Index::from(index);
                    (
                        quote!(#member),
                        quote!(::trimmer::visitor::Field::indexed(#index)),
                    )
                }
            };

            if field.skip {
                field_meta = quote!(#field_meta.skipped());
            }

            if field.opaque {
                let ty = &field.ty;
                quote! {
                    ::trimmer::visitor::perform_field_other(
                        visitor,
                        #field_meta,
                        ::std::any::type_name::<#ty>(),
                    )?;
                }
            } else {
                quote! {
                    ::trimmer::visitor::perform_field_mut(
                        visitor,
                        #field_meta,
                        &mut self.#member,
                    )?;
                }
            }
        })
        .collect();

    let visitor_arg = if visits.is_empty() {
        quote!(_visitor)
    } else {
        quote!(visitor)
    };

    quote! {
        impl #impl_generics ::trimmer::traits::Trim for #ident #ty_generics #where_clause {
            fn drive_mut(
                &mut self,
                visitor: &mut dyn ::trimmer::visitor::VisitorMutCore,
            ) -> ::std::result::Result<(), ::trimmer::error::TrimError> {
                visitor.visit(::trimmer::visitor::Node::Record(self))
            }
        }

        impl #impl_generics ::trimmer::traits::Record for #ident #ty_generics #where_clause {
            fn drive_fields(
                &mut self,
                #visitor_arg: &mut dyn ::trimmer::visitor::VisitorMutCore,
            ) -> ::std::result::Result<(), ::trimmer::error::TrimError> {
                #(#visits)*

                ::std::result::Result::Ok(())
            }
        }
    }
}

///
/// Text
/// Newtype alias over a text slot.
///

fn text_tokens(node: &TrimInput, inner: &syn::Type) -> TokenStream {
    let ident = &node.ident;
    let mut generics = node.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#inner: ::trimmer::traits::TextSlot));

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::trimmer::traits::TextSlot for #ident #ty_generics #where_clause {
            fn text(&self) -> &str {
                ::trimmer::traits::TextSlot::text(&self.0)
            }

            fn retain_span(&mut self, span: ::std::ops::Range<usize>) {
                ::trimmer::traits::TextSlot::retain_span(&mut self.0, span);
            }
        }

        impl #impl_generics ::trimmer::traits::Trim for #ident #ty_generics #where_clause {
            fn drive_mut(
                &mut self,
                visitor: &mut dyn ::trimmer::visitor::VisitorMutCore,
            ) -> ::std::result::Result<(), ::trimmer::error::TrimError> {
                visitor.visit(::trimmer::visitor::Node::Text(self))
            }
        }
    }
}

///
/// Opaque
/// Leaf that is never traversed, whatever its fields are.
///

fn opaque_tokens(node: &TrimInput) -> TokenStream {
    let ident = &node.ident;
    let (impl_generics, ty_generics, where_clause) = node.generics.split_for_impl();

    quote! {
        impl #impl_generics ::trimmer::traits::Trim for #ident #ty_generics #where_clause {
            fn drive_mut(
                &mut self,
                visitor: &mut dyn ::trimmer::visitor::VisitorMutCore,
            ) -> ::std::result::Result<(), ::trimmer::error::TrimError> {
                visitor.visit(::trimmer::visitor::Node::Other(::std::any::type_name::<Self>()))
            }
        }
    }
}
