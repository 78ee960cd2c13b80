use crate::{
    err,
    stmt::{Record, Row, Value},
    Entity, Error, Result, Schema,
};

use indexmap::IndexMap;

/// Decodes a row into a typed entity.
///
/// Cells are matched to fields by `family + separator + qualifier`, cells of
/// a dynamic group's family are gathered into the group's map, and only the
/// newest version of each cell is read. Columns the entity does not declare
/// are ignored. A value that fails to decode or assign is logged and the
/// field keeps its default.
///
/// Returns `None` for an empty row.
pub fn from_row<E: Entity>(row: &Row) -> Result<Option<E>> {
    decode(E::schema()?, row)
}

/// Decodes a row into a [`Record`] keyed by bare qualifier.
///
/// Values are kept as stored text. A fixed field stored in a dynamic group's
/// family is only included when its qualifier is in `requested`; every other
/// qualifier of that family goes into the group's map.
///
/// Returns `None` for an empty row.
pub fn from_row_columns<E: Entity>(row: &Row, requested: &[&str]) -> Result<Option<Record>> {
    let schema = E::schema()?;

    if row.is_empty() {
        return Ok(None);
    }

    let mut record = Record::new(row.key_str());

    for (name, value) in collect(schema, row, Mode::Columns(requested)) {
        record.insert(name, value);
    }

    Ok(Some(record))
}

#[derive(Debug, Clone, Copy)]
enum Mode<'a> {
    /// Keys are logical field names
    Typed,

    /// Keys are bare qualifiers; embedded fixed fields are opt-in
    Columns(&'a [&'a str]),
}

/// Walks the newest version of every cell and groups them by the logical
/// name they decode to.
fn collect(schema: &Schema, row: &Row, mode: Mode<'_>) -> IndexMap<String, Value> {
    let mut out = IndexMap::new();

    for (family, qualifiers) in &row.families {
        let family = String::from_utf8_lossy(family).to_lowercase();

        let latest = qualifiers.iter().filter_map(|(qualifier, versions)| {
            let (_, value) = versions.last_key_value()?;
            Some((
                String::from_utf8_lossy(qualifier).into_owned(),
                String::from_utf8_lossy(value).into_owned(),
            ))
        });

        match schema.group_for_family(&family) {
            Some(group) => {
                let mut entries = IndexMap::new();

                for (qualifier, value) in latest {
                    let name = format!("{family}{}{qualifier}", schema.separator);
                    let embedded = schema
                        .field_by_name(&name)
                        .is_some_and(|field| !field.dynamic);

                    if !embedded {
                        entries.insert(qualifier, value);
                        continue;
                    }

                    match mode {
                        Mode::Typed => {
                            out.insert(name, Value::String(value));
                        }
                        Mode::Columns(requested) => {
                            if requested.contains(&qualifier.as_str()) {
                                out.insert(qualifier, Value::String(value));
                            }
                        }
                    }
                }

                if !entries.is_empty() {
                    out.insert(group.name.clone(), Value::Map(entries));
                }
            }
            None => {
                for (qualifier, value) in latest {
                    let name = match mode {
                        Mode::Typed => format!("{family}{}{qualifier}", schema.separator),
                        Mode::Columns(_) => qualifier,
                    };

                    out.insert(name, Value::String(value));
                }
            }
        }
    }

    out
}

fn decode<E: Entity>(schema: &Schema, row: &Row) -> Result<Option<E>> {
    if row.is_empty() {
        return Ok(None);
    }

    let row_key = row.key_str();

    let mut entity = E::default();
    entity.load_row_key(Value::String(row_key.to_string()))?;

    for (name, value) in collect(schema, row, Mode::Typed) {
        let Some(field) = schema.field_by_name(&name) else {
            log::debug!(
                "dropping column not declared by entity; entity={}; column={name}; row_key={row_key}",
                schema.name
            );
            continue;
        };

        let raw = value.to_string();

        let res = match value {
            Value::String(text) if !field.dynamic => field.ty.decode(text.as_bytes()),
            value => Ok(value),
        }
        .and_then(|value| entity.load_field(field.index, value));

        if let Err(cause) = res {
            let err = cause.context(Error::field_assignment_failed(
                &field.name,
                &*row_key,
                raw,
                &schema.name,
            ));

            if err.any(Error::is_unsupported_field_type) {
                return Err(err.context(err!("decoding row `{row_key}` of `{}`", schema.table)));
            }

            log::error!("{err}");
        }
    }

    Ok(Some(entity))
}
