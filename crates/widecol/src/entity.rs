use crate::{stmt::Value, Result, Schema};

/// A type mapped to rows of a wide-column table.
///
/// Implemented by `#[derive(Entity)]`. Fields are addressed by their index
/// in [`Schema::fields`]; the row key is handled separately and never
/// appears there.
pub trait Entity: Default + Sized {
    /// The entity's storage layout, built once per type.
    ///
    /// Fails if the declaration is invalid, for example a field name without
    /// a family separator.
    fn schema() -> Result<&'static Schema>;

    /// The row key, or [`Value::Null`] when unset.
    fn row_key(&self) -> Value;

    fn load_row_key(&mut self, value: Value) -> Result<()>;

    /// The value of the field at `index`, [`Value::Null`] when absent.
    fn field(&self, index: usize) -> Value;

    /// Assigns a decoded value to the field at `index`.
    fn load_field(&mut self, index: usize, value: Value) -> Result<()>;
}
