use crate::{
    err,
    stmt::{Mutation, Put, Value},
    Entity, Error, Result, Schema,
};

/// Encodes an entity into the puts for its row.
///
/// Null fields are skipped, so writing an entity only touches the columns
/// it has values for. A dynamic group contributes one put per entry.
pub fn to_mutation<E: Entity>(entity: &E) -> Result<Mutation> {
    encode(E::schema()?, entity)
}

/// Encodes each entity independently.
///
/// The result has one entry per input entity, in order. A failure carries
/// the entity's position in the batch as context and does not affect the
/// other entries.
pub fn to_mutations<E: Entity>(entities: &[E]) -> Vec<Result<Mutation>> {
    let schema = match E::schema() {
        Ok(schema) => schema,
        Err(err) => return entities.iter().map(|_| Err(err.clone())).collect(),
    };

    entities
        .iter()
        .enumerate()
        .map(|(index, entity)| {
            encode(schema, entity).map_err(|e| e.context(err!("entity #{index} in batch")))
        })
        .collect()
}

fn encode<E: Entity>(schema: &Schema, entity: &E) -> Result<Mutation> {
    let row_key = match entity.row_key() {
        Value::String(row_key) if !row_key.is_empty() => row_key,
        attempted => return Err(Error::missing_row_key(&schema.name, &attempted)),
    };

    let mut mutation = Mutation::new(row_key);

    for field in &schema.fields {
        let value = entity.field(field.index);

        if value.is_null() {
            continue;
        }

        if field.dynamic {
            let Value::Map(entries) = value else {
                return Err(Error::type_conversion(value, "map"));
            };

            for (qualifier, value) in entries {
                mutation.push(Put::new(field.family.as_str(), qualifier, value));
            }
        } else {
            let bytes = value
                .encode()
                .map_err(|e| e.context(err!("field `{}`", field.name)))?;
            mutation.push(Put::new(
                field.family.as_str(),
                field.qualifier.as_str(),
                bytes,
            ));
        }
    }

    Ok(mutation)
}
