use super::{EntityAttr, ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Entity {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// The row key field
    pub(crate) row_key: Field,

    /// Every other field, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Optional table to map the entity to
    pub(crate) table: Option<syn::LitStr>,

    /// Optional family/qualifier separator
    pub(crate) separator: Option<syn::LitStr>,
}

impl Entity {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "entity fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "entity generics are not supported",
            ));
        }

        let mut attr = EntityAttr::default();
        let mut errs = ErrorSet::new();

        if let Err(err) = attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        let separator = attr
            .separator
            .as_ref()
            .map(syn::LitStr::value)
            .unwrap_or_else(|| "_".to_string());

        let mut row_key = None;
        let mut fields = vec![];

        for node in &node.named {
            let field = match Field::from_ast(node) {
                Ok(field) => field,
                Err(err) => {
                    errs.push(err);
                    continue;
                }
            };

            if let Some(key) = &field.attrs.key {
                if row_key.is_some() {
                    errs.push(syn::Error::new_spanned(
                        key,
                        "only one field can be the row key",
                    ));
                } else {
                    row_key = Some(field);
                }
                continue;
            }

            if !field.is_dynamic() && !field.name.contains(&separator) {
                errs.push(syn::Error::new_spanned(
                    &field.ident,
                    format!(
                        "field `{}` has no `{separator}` separator; name it `<family>{separator}<qualifier>` or mark it #[dynamic]",
                        field.name
                    ),
                ));
            }

            fields.push(field);
        }

        let missing_key = || {
            syn::Error::new_spanned(&ast.ident, "entity has no row key; mark one field with #[key]")
        };

        if row_key.is_none() {
            errs.push(missing_key());
        }

        let row_key = match (row_key, errs.collect()) {
            (_, Some(err)) => return Err(err),
            (Some(row_key), None) => row_key,
            (None, None) => return Err(missing_key()),
        };

        Ok(Entity {
            ident: ast.ident.clone(),
            row_key,
            fields,
            table: attr.table,
            separator: attr.separator,
        })
    }
}
