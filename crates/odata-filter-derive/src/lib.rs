//! Derive support for `odata-filter`: generates the property-shaped builder
//! proxy for a schema struct.

use proc_macro::TokenStream;

mod filterable;

#[proc_macro_derive(Filterable, attributes(filter))]
pub fn derive_filterable(input: TokenStream) -> TokenStream {
    filterable::derive_filterable(input.into()).into()
}
