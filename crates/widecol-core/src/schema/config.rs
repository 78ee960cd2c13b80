use super::{Builder, Schema};
use crate::{stmt::Type, Result};

use serde::Deserialize;

/// A schema declared as data rather than through `#[derive(Entity)]`.
///
/// Field types are given by name and resolved with [`Type::from_name`], so
/// a configuration naming an unknown type fails with an unsupported field
/// type error.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub name: String,

    #[serde(default)]
    pub table: Option<String>,

    #[serde(default)]
    pub separator: Option<String>,

    pub row_key: String,

    #[serde(default)]
    pub fields: Vec<FieldConfig>,

    /// Names of fields holding dynamic groups.
    #[serde(default)]
    pub dynamic: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldConfig {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,
}

impl Config {
    pub fn build(&self) -> Result<Schema> {
        let mut builder = Builder::new(&self.name);

        builder.row_key(&self.row_key, Type::String);

        if let Some(table) = &self.table {
            builder.table(table);
        }

        if let Some(separator) = &self.separator {
            builder.separator(separator);
        }

        for field in &self.fields {
            builder.field(&field.name, Type::from_name(&field.ty)?);
        }

        for name in &self.dynamic {
            builder.dynamic(name);
        }

        builder.build()
    }
}

impl TryFrom<&Config> for Schema {
    type Error = crate::Error;

    fn try_from(config: &Config) -> Result<Schema> {
        config.build()
    }
}
