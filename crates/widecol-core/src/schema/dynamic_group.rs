/// A field holding a runtime-variable set of qualifiers in one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicGroup {
    /// Index of the grouped field in [`Schema::fields`](super::Schema::fields).
    pub field: usize,

    /// Lower-cased field name.
    pub name: String,

    /// Lower-cased column family.
    pub family: String,
}
