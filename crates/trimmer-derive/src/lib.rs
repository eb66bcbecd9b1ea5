use proc_macro::TokenStream;

mod node;
mod trim;
mod util;

/// Derive the capability traits the trimmer walks.
///
/// - structs with named or tuple fields become records
/// - `#[trim(skip)]` on a field leaves its text untouched
/// - `#[trim(text)]` on a single-field tuple struct makes it a text alias
/// - `#[trim(opaque)]` makes the type a leaf that is never traversed
#[proc_macro_derive(Trim, attributes(trim))]
pub fn derive_trim(input: TokenStream) -> TokenStream {
    trim::derive_trim(input.into()).into()
}
