use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Struct field identifier
    pub(crate) ident: syn::Ident,

    /// Logical field name, `<family><separator><qualifier>`
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// The `#[key]` attribute, if present
    pub(crate) key: Option<syn::Attribute>,

    /// The `#[dynamic]` attribute, if present
    pub(crate) dynamic: Option<syn::Attribute>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            let slot = if attr.path().is_ident("key") {
                &mut attrs.key
            } else if attr.path().is_ident("dynamic") {
                &mut attrs.dynamic
            } else {
                continue;
            };

            if !matches!(attr.meta, syn::Meta::Path(_)) {
                return Err(syn::Error::new_spanned(attr, "attribute takes no arguments"));
            }

            if slot.is_some() {
                return Err(syn::Error::new_spanned(attr, "duplicate attribute"));
            }

            *slot = Some(attr.clone());
        }

        if let (Some(_), Some(dynamic)) = (&attrs.key, &attrs.dynamic) {
            return Err(syn::Error::new_spanned(
                dynamic,
                "the row key cannot be a dynamic group",
            ));
        }

        Ok(Field {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty: field.ty.clone(),
            attrs,
        })
    }

    pub(crate) fn is_dynamic(&self) -> bool {
        self.attrs.dynamic.is_some()
    }
}
