extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(Entity, attributes(key, dynamic, table, separator))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    match widecol_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
