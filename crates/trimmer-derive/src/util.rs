use proc_macro2::TokenStream;
use syn::{Generics, Ident, parse_quote};

/// Copy of `generics` with `bound` required on every type parameter.
pub fn with_type_param_bound(generics: &Generics, bound: &TokenStream) -> Generics {
    let mut generics = generics.clone();
    let params: Vec<Ident> = generics.type_params().map(|p| p.ident.clone()).collect();

    if !params.is_empty() {
        let where_clause = generics.make_where_clause();
        for ident in params {
            where_clause.predicates.push(parse_quote!(#ident: #bound));
        }
    }

    generics
}
