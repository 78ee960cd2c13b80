use super::{DynamicGroup, Field, Schema};
use crate::{stmt::Type, Error, Result};

use heck::ToSnakeCase;
use indexmap::IndexMap;

/// Declares the fields of an entity type and validates them into a
/// [`Schema`].
#[derive(Debug, Clone)]
pub struct Builder {
    name: String,
    table: Option<String>,
    separator: String,
    row_key: Option<(String, Type)>,
    fields: Vec<(String, Type)>,
    dynamic: Vec<String>,
}

impl Builder {
    pub(super) fn new(name: impl Into<String>) -> Builder {
        Builder {
            name: name.into(),
            table: None,
            separator: "_".to_string(),
            row_key: None,
            fields: vec![],
            dynamic: vec![],
        }
    }

    /// Sets the table name. Defaults to the entity name in snake case.
    pub fn table(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = Some(table.into());
        self
    }

    /// Sets the family/qualifier separator. Defaults to `_`.
    pub fn separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.separator = separator.into();
        self
    }

    pub fn row_key(&mut self, name: impl Into<String>, ty: Type) -> &mut Self {
        self.row_key = Some((name.into(), ty));
        self
    }

    pub fn field(&mut self, name: impl Into<String>, ty: Type) -> &mut Self {
        self.fields.push((name.into(), ty));
        self
    }

    /// Marks a declared `Map` field as a dynamic group.
    pub fn dynamic(&mut self, name: impl Into<String>) -> &mut Self {
        self.dynamic.push(name.into());
        self
    }

    pub fn build(&self) -> Result<Schema> {
        let Some((row_key, row_key_ty)) = &self.row_key else {
            return Err(self.error("no row key declared"));
        };

        if *row_key_ty != Type::String {
            return Err(self.error(format!(
                "row key `{row_key}` must be a string, found {row_key_ty:?}"
            )));
        }

        if self.separator.is_empty() {
            return Err(self.error("separator must not be empty"));
        }

        let mut lookup = IndexMap::new();

        for (index, (name, _)) in self.fields.iter().enumerate() {
            let lower = name.to_lowercase();

            if lower == row_key.to_lowercase() {
                return Err(self.error(format!("field `{name}` collides with the row key")));
            }

            if lookup.insert(lower, index).is_some() {
                return Err(self.error(format!("field `{name}` declared more than once")));
            }
        }

        let mut dynamic = vec![false; self.fields.len()];

        for name in &self.dynamic {
            let Some(&index) = lookup.get(&name.to_lowercase()) else {
                return Err(self.error(format!("dynamic group `{name}` is not a declared field")));
            };

            if dynamic[index] {
                return Err(self.error(format!("dynamic group `{name}` declared more than once")));
            }

            dynamic[index] = true;
        }

        let mut fields = Vec::with_capacity(self.fields.len());
        let mut groups = vec![];

        for (index, (name, ty)) in self.fields.iter().enumerate() {
            let field = if dynamic[index] {
                if !ty.is_map() {
                    return Err(self.error(format!(
                        "dynamic group `{name}` must be a string map, found {ty:?}"
                    )));
                }

                let family = match name.split_once(&self.separator) {
                    Some((family, _)) => family,
                    None => name.as_str(),
                };

                groups.push(DynamicGroup {
                    field: index,
                    name: name.to_lowercase(),
                    family: family.to_lowercase(),
                });

                Field {
                    index,
                    name: name.clone(),
                    family: family.to_string(),
                    qualifier: String::new(),
                    ty: *ty,
                    dynamic: true,
                }
            } else {
                if ty.is_map() {
                    return Err(self.error(format!(
                        "map field `{name}` must be declared as a dynamic group"
                    )));
                }

                let Some((family, qualifier)) = name.split_once(&self.separator) else {
                    return Err(self.error(format!(
                        "field `{name}` has no `{}` separator; cannot derive a column family",
                        self.separator
                    )));
                };

                if family.is_empty() || qualifier.is_empty() {
                    return Err(self.error(format!(
                        "field `{name}` must have a non-empty family and qualifier"
                    )));
                }

                Field {
                    index,
                    name: name.clone(),
                    family: family.to_string(),
                    qualifier: qualifier.to_string(),
                    ty: *ty,
                    dynamic: false,
                }
            };

            fields.push(field);
        }

        Ok(Schema {
            name: self.name.clone(),
            table: self
                .table
                .clone()
                .unwrap_or_else(|| self.name.to_snake_case()),
            separator: self.separator.clone(),
            row_key: row_key.clone(),
            fields,
            groups,
            lookup,
        })
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::invalid_schema(format!("{}: {}", self.name, message.into()))
    }
}
