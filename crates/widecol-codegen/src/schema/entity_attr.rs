use super::ErrorSet;

#[derive(Debug, Default)]
pub(crate) struct EntityAttr {
    /// Optional table to map the entity to
    pub(crate) table: Option<syn::LitStr>,

    /// Optional family/qualifier separator
    pub(crate) separator: Option<syn::LitStr>,
}

impl EntityAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            let slot = if attr.path().is_ident("table") {
                &mut self.table
            } else if attr.path().is_ident("separator") {
                &mut self.separator
            } else {
                continue;
            };

            match lit_str(attr) {
                Ok(_) if slot.is_some() => {
                    errs.push(syn::Error::new_spanned(attr, "duplicate attribute"));
                }
                Ok(lit) if lit.value().is_empty() => {
                    errs.push(syn::Error::new_spanned(lit, "value must not be empty"));
                }
                Ok(lit) => *slot = Some(lit),
                Err(err) => errs.push(err),
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Parses `#[name = "value"]`.
fn lit_str(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    let expected = || {
        let name = attr
            .path()
            .get_ident()
            .map(|ident| ident.to_string())
            .unwrap_or_default();
        syn::Error::new_spanned(attr, format!("expected `{name} = \"...\"`"))
    };

    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(expected());
    };

    let syn::Expr::Lit(lit) = &meta.value else {
        return Err(expected());
    };

    let syn::Lit::Str(lit) = &lit.lit else {
        return Err(expected());
    };

    Ok(lit.clone())
}
