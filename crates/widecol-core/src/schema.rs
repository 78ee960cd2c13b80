mod builder;
pub use builder::Builder;

mod config;
pub use config::{Config, FieldConfig};

mod dynamic_group;
pub use dynamic_group::DynamicGroup;

mod field;
pub use field::Field;

use indexmap::IndexMap;

/// Storage layout of one entity type.
///
/// Derived once from the entity's declared fields: every field except the
/// row key is split into a column family and qualifier on the first
/// separator, and fields holding dynamic groups are recorded together with
/// the family their qualifiers live under.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Entity type name, used in diagnostics.
    pub name: String,

    /// Table the entity is stored in.
    pub table: String,

    /// Separator between family and qualifier in field names.
    pub separator: String,

    /// Name of the row key field.
    pub row_key: String,

    /// Every field except the row key, in declaration order.
    pub fields: Vec<Field>,

    /// Dynamic groups, in declaration order.
    pub groups: Vec<DynamicGroup>,

    /// Lower-cased field name to index into `fields`.
    lookup: IndexMap<String, usize>,
}

impl Schema {
    pub fn builder(name: impl Into<String>) -> Builder {
        Builder::new(name)
    }

    #[track_caller]
    pub fn field(&self, index: usize) -> &Field {
        &self.fields[index]
    }

    /// Looks up a field by logical name, ignoring case.
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        let index = match self.lookup.get(name) {
            Some(index) => *index,
            None => *self.lookup.get(&name.to_lowercase())?,
        };
        Some(&self.fields[index])
    }

    /// Fields stored in exactly one cell.
    pub fn fixed_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| !field.dynamic)
    }

    /// The first dynamic group stored under `family` (lower-cased).
    pub fn group_for_family(&self, family: &str) -> Option<&DynamicGroup> {
        self.groups.iter().find(|group| group.family == family)
    }

    /// The dynamic group whose field is named `name`, ignoring case.
    pub fn grouped_field(&self, name: &str) -> Option<&DynamicGroup> {
        self.groups
            .iter()
            .find(|group| group.name.eq_ignore_ascii_case(name))
    }

    pub fn is_grouped_family(&self, family: &str) -> bool {
        self.group_for_family(family).is_some()
    }
}
