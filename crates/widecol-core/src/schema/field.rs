use crate::stmt::Type;

/// A declared entity field and the column it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Position in [`Schema::fields`](super::Schema::fields).
    pub index: usize,

    /// Logical name, as declared.
    pub name: String,

    /// Column family, as declared.
    pub family: String,

    /// Column qualifier, as declared. Empty for dynamic groups.
    pub qualifier: String,

    pub ty: Type,

    /// The field holds a dynamic group.
    pub dynamic: bool,
}
