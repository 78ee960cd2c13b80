use crate::{stmt::Filter, Entity, Result, Schema};

/// Builds the filter that projects a read onto `columns`.
///
/// A column naming a dynamic group selects that group's whole family. Any
/// other column selects qualifiers starting with it, in every family. The
/// per-column filters are OR-ed; when `value_filter` is given, the result is
/// `value_filter AND (columns...)`.
///
/// With no columns the projection passes every cell.
pub fn column_filter<E: Entity>(columns: &[&str], value_filter: Option<Filter>) -> Result<Filter> {
    Ok(build(E::schema()?, columns, value_filter))
}

fn build(schema: &Schema, columns: &[&str], value_filter: Option<Filter>) -> Filter {
    let projection = Filter::any(columns.iter().map(|column| {
        match schema.grouped_field(column) {
            Some(group) => Filter::family(schema.field(group.field).family.as_str()),
            None => Filter::qualifier_prefix(*column),
        }
    }));

    match value_filter {
        Some(value_filter) => Filter::all([value_filter, projection]),
        None => projection,
    }
}
