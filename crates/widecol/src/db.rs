mod builder;
pub use builder::Builder;

mod connect;
pub use connect::Connect;

mod scan;
pub use scan::Scan;

use crate::{
    driver::{operation, Connection, Driver, Operation, Response},
    engine, err,
    stmt::{Column, Filter, Record, Row},
    Entity, Result, Schema,
};

use std::sync::Arc;

/// A handle to a wide-column store, mapping entities to its tables.
///
/// Each operation opens a connection through the driver, runs a single
/// store operation, and releases the connection.
#[derive(Debug, Clone)]
pub struct Db {
    driver: Arc<dyn Driver>,

    /// Prepended to every entity's table name
    table_name_prefix: String,

    /// Rows fetched per round trip when scanning
    scan_caching: u32,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The full table name an entity type is stored in.
    pub fn table_name<E: Entity>(&self) -> Result<String> {
        Ok(self.table(E::schema()?))
    }

    /// Writes one entity. Only the columns the entity has values for are
    /// touched.
    pub async fn add_update<E: Entity>(&self, entity: &E) -> Result<()> {
        let schema = E::schema()?;
        let mutation = engine::to_mutation(entity)?;

        self.exec(operation::Write {
            table: self.table(schema),
            mutations: vec![mutation],
        })
        .await?;

        Ok(())
    }

    /// Writes a batch of entities with a single store operation.
    ///
    /// An entity that fails to encode is skipped and the rest are still
    /// written. The returned error then names each skipped entity by its
    /// position and row key.
    pub async fn add_update_all<E: Entity>(&self, entities: &[E]) -> Result<()> {
        let schema = E::schema()?;

        let mut mutations = Vec::with_capacity(entities.len());
        let mut failures = vec![];

        for (index, (entity, res)) in entities
            .iter()
            .zip(engine::to_mutations(entities))
            .enumerate()
        {
            match res {
                Ok(mutation) => mutations.push(mutation),
                Err(err) => {
                    log::error!("batch write to `{}` skips an entity; {err}", schema.table);
                    failures.push((index, entity.row_key(), err));
                }
            }
        }

        if !mutations.is_empty() {
            self.exec(operation::Write {
                table: self.table(schema),
                mutations,
            })
            .await?;
        }

        let skipped = failures
            .iter()
            .map(|(index, row_key, _)| format!("#{index} (row_key={row_key})"))
            .collect::<Vec<_>>()
            .join(", ");

        match failures.into_iter().next() {
            None => Ok(()),
            Some((_, _, err)) => Err(err.context(err!(
                "batch write to `{}` skipped {skipped}",
                schema.table
            ))),
        }
    }

    /// Loads the entity stored under `row_key`.
    pub async fn get<E: Entity>(&self, row_key: &str) -> Result<Option<E>> {
        self.get_inner(row_key, None).await
    }

    /// Loads the entity stored under `row_key`, reading only cells that pass
    /// `filter`.
    pub async fn get_filtered<E: Entity>(&self, row_key: &str, filter: Filter) -> Result<Option<E>> {
        self.get_inner(row_key, Some(filter)).await
    }

    async fn get_inner<E: Entity>(&self, row_key: &str, filter: Option<Filter>) -> Result<Option<E>> {
        let schema = E::schema()?;

        let Some(row) = self.get_row(schema, row_key, filter).await? else {
            return Ok(None);
        };

        engine::from_row(&row)
    }

    /// Loads every entity in the table.
    pub async fn all<E: Entity>(&self) -> Result<Vec<E>> {
        self.scan(Scan::new()).await
    }

    /// Loads the entities in a key range, optionally filtered.
    ///
    /// Rows that fail to decode are logged and skipped.
    pub async fn scan<E: Entity>(&self, scan: Scan) -> Result<Vec<E>> {
        let schema = E::schema()?;
        let rows = self.scan_rows(schema, scan).await?;

        let mut entities = Vec::with_capacity(rows.len());

        for row in rows {
            match engine::from_row(&row) {
                Ok(Some(entity)) => entities.push(entity),
                Ok(None) => {}
                Err(err) => log::error!(
                    "skipping row `{}` of `{}`; {err}",
                    row.key_str(),
                    schema.table
                ),
            }
        }

        Ok(entities)
    }

    /// Reads the requested columns of every row.
    pub async fn select<E: Entity>(&self, columns: &[&str]) -> Result<Vec<Record>> {
        self.select_scan::<E>(columns, None).await
    }

    /// Reads the requested columns of every row passing `filter`.
    pub async fn select_filtered<E: Entity>(
        &self,
        filter: Filter,
        columns: &[&str],
    ) -> Result<Vec<Record>> {
        self.select_scan::<E>(columns, Some(filter)).await
    }

    async fn select_scan<E: Entity>(
        &self,
        columns: &[&str],
        value_filter: Option<Filter>,
    ) -> Result<Vec<Record>> {
        let schema = E::schema()?;
        let filter = engine::column_filter::<E>(columns, value_filter)?;
        let rows = self.scan_rows(schema, Scan::new().filter(filter)).await?;

        let mut records = Vec::with_capacity(rows.len());

        for row in rows {
            if let Some(record) = engine::from_row_columns::<E>(&row, columns)? {
                records.push(record);
            }
        }

        Ok(records)
    }

    /// Reads the requested columns of the row stored under `row_key`.
    pub async fn select_by_id<E: Entity>(
        &self,
        row_key: &str,
        columns: &[&str],
    ) -> Result<Option<Record>> {
        let schema = E::schema()?;
        let filter = engine::column_filter::<E>(columns, None)?;

        let Some(row) = self.get_row(schema, row_key, Some(filter)).await? else {
            return Ok(None);
        };

        engine::from_row_columns::<E>(&row, columns)
    }

    /// Deletes the whole row stored under `row_key`.
    pub async fn delete<E: Entity>(&self, row_key: &str) -> Result<()> {
        let schema = E::schema()?;

        self.exec(operation::Delete {
            table: self.table(schema),
            row_key: row_key.to_string(),
            columns: vec![],
        })
        .await?;

        Ok(())
    }

    /// Deletes the given qualifiers of one family from a row.
    pub async fn delete_columns<E: Entity>(
        &self,
        row_key: &str,
        family: &str,
        qualifiers: &[&str],
    ) -> Result<()> {
        let schema = E::schema()?;

        if qualifiers.is_empty() {
            return Ok(());
        }

        self.exec(operation::Delete {
            table: self.table(schema),
            row_key: row_key.to_string(),
            columns: qualifiers
                .iter()
                .map(|qualifier| Column::new(family, *qualifier))
                .collect(),
        })
        .await?;

        Ok(())
    }

    /// Deletes every row holding an entity that passes `filter`.
    ///
    /// Keeps going when a single delete fails and returns the first failure
    /// once all rows have been attempted.
    pub async fn delete_by_filter<E: Entity>(&self, filter: Filter) -> Result<()> {
        let schema = E::schema()?;
        let rows = self.scan_rows(schema, Scan::new().filter(filter)).await?;

        let mut first_err = None;

        for row in rows {
            let row_key = row.key_str();

            if let Err(err) = self.delete::<E>(&row_key).await {
                log::error!("failed to delete row `{row_key}` of `{}`; {err}", schema.table);
                first_err.get_or_insert(err);
            }
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn get_row(
        &self,
        schema: &Schema,
        row_key: &str,
        filter: Option<Filter>,
    ) -> Result<Option<Row>> {
        let table = self.table(schema);

        let rows = self
            .exec(operation::Get {
                table: table.clone(),
                row_key: row_key.to_string(),
                filter,
            })
            .await?
            .into_rows()
            .await?;

        let row = rows.into_iter().next().filter(|row| !row.is_empty());

        if row.is_none() {
            log::info!("no matching record found by id: {row_key} in table: {table}");
        }

        Ok(row)
    }

    async fn scan_rows(&self, schema: &Schema, scan: Scan) -> Result<Vec<Row>> {
        let table = self.table(schema);

        let rows = self
            .exec(scan.into_operation(table.clone(), self.scan_caching))
            .await?
            .into_rows()
            .await?;

        if rows.is_empty() {
            log::info!("no matching records found in table: {table}");
        }

        Ok(rows)
    }

    async fn exec(&self, op: impl Into<Operation>) -> Result<Response> {
        let mut connection: Box<dyn Connection> = self.driver.connect().await?;
        connection.exec(op.into()).await
    }

    fn table(&self, schema: &Schema) -> String {
        format!("{}{}", self.table_name_prefix, schema.table)
    }
}
