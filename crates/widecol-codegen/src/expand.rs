mod util;

use crate::schema::Entity;

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn entity(entity: &Entity) -> TokenStream {
    let widecol = quote!(_widecol::codegen_support);
    let ident = &entity.ident;
    let name = ident.to_string();

    let schema_body = expand_schema_body(entity, &widecol);
    let row_key_ident = &entity.row_key.ident;
    let row_key_ty = &entity.row_key.ty;

    let field_arms = entity.fields.iter().enumerate().map(|(index, field)| {
        let index = util::int(index);
        let field_ident = &field.ident;

        quote!(#index => #widecol::Primitive::to_value(&self.#field_ident),)
    });

    let load_arms = entity.fields.iter().enumerate().map(|(index, field)| {
        let index = util::int(index);
        let field_ident = &field.ident;
        let ty = &field.ty;

        quote!(#index => self.#field_ident = <#ty as #widecol::Primitive>::load(value)?,)
    });

    wrap_in_const(quote! {
        impl #widecol::Entity for #ident {
            fn schema() -> #widecol::Result<&'static #widecol::Schema> {
                static SCHEMA: #widecol::OnceLock<#widecol::Result<#widecol::Schema>> =
                    #widecol::OnceLock::new();

                match SCHEMA.get_or_init(|| { #schema_body }) {
                    Ok(schema) => Ok(schema),
                    Err(err) => #widecol::Err(err.clone()),
                }
            }

            fn row_key(&self) -> #widecol::Value {
                #widecol::Primitive::to_value(&self.#row_key_ident)
            }

            fn load_row_key(&mut self, value: #widecol::Value) -> #widecol::Result<()> {
                self.#row_key_ident = <#row_key_ty as #widecol::Primitive>::load(value)?;
                Ok(())
            }

            fn field(&self, index: usize) -> #widecol::Value {
                match index {
                    #( #field_arms )*
                    _ => #widecol::Value::Null,
                }
            }

            fn load_field(&mut self, index: usize, value: #widecol::Value) -> #widecol::Result<()> {
                match index {
                    #( #load_arms )*
                    _ => {
                        return #widecol::Err(#widecol::Error::from_args(format_args!(
                            "field index out of bounds; entity={}; index={}",
                            #name,
                            index
                        )))
                    }
                }

                Ok(())
            }
        }
    })
}

fn expand_schema_body(entity: &Entity, widecol: &TokenStream) -> TokenStream {
    let name = entity.ident.to_string();
    let row_key_name = &entity.row_key.name;
    let row_key_ty = &entity.row_key.ty;

    let table = entity
        .table
        .as_ref()
        .map(|table| quote!(builder.table(#table);));

    let separator = entity
        .separator
        .as_ref()
        .map(|separator| quote!(builder.separator(#separator);));

    let fields = entity.fields.iter().map(|field| {
        let name = &field.name;
        let ty = &field.ty;

        quote!(builder.field(#name, <#ty as #widecol::Primitive>::TYPE);)
    });

    let dynamic = entity
        .fields
        .iter()
        .filter(|field| field.is_dynamic())
        .map(|field| {
            let name = &field.name;
            quote!(builder.dynamic(#name);)
        });

    quote! {
        let mut builder = #widecol::Schema::builder(#name);
        #table
        #separator
        builder.row_key(#row_key_name, <#row_key_ty as #widecol::Primitive>::TYPE);
        #( #fields )*
        #( #dynamic )*
        builder.build()
    }
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use widecol as _widecol;

            #code
        };
    }
}
