//! Generic record service: CRUD over exactly one table, driven by the
//! table's [`TableSchema`] descriptor.
//!
//! Records travel between the typed API and the dynamic SQL as JSON maps:
//! an entity serializes to a map keyed by column name, structured (list)
//! columns are stringified on the way in and parsed on the way out, and
//! boolean columns are surfaced as native bools. One implementation covers
//! all five domain bindings without duplicating the codec per entity.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::error;
use uuid::Uuid;

use crate::error::AppError;
use crate::schema::{Column, ColumnType, TableSchema};
use crate::store::Store;

/// A row type bound to one table of the store.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    const SCHEMA: TableSchema;

    fn id(&self) -> &str;
}

pub struct RecordService<T: Entity> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Clone for RecordService<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> RecordService<T> {
    pub fn new(store: &Store) -> Self {
        Self {
            pool: store.pool().clone(),
            _entity: PhantomData,
        }
    }

    /// Unfiltered read of the whole table.
    pub async fn get_all(&self) -> Result<Vec<T>, AppError> {
        let sql = format!("SELECT * FROM {}", T::SCHEMA.table);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(|row| decode_row::<T>(row)).collect()
    }

    /// Inserts `draft` (the record minus its id) under a synthesized
    /// `{singular}-{uuid}` id and returns the full record.
    pub async fn add<D: Serialize + Sync>(&self, draft: &D) -> Result<T, AppError> {
        let schema = T::SCHEMA;
        let mut record = to_object(draft)?;
        let id = format!("{}-{}", schema.singular, Uuid::new_v4());
        record.insert(schema.primary_key.to_string(), Value::String(id));
        check_columns(&schema, &record)?;
        insert_row(&self.pool, &schema, &record).await?;
        Ok(serde_json::from_value(Value::Object(record))?)
    }

    /// Updates only the columns present in `patch` on the row matching `id`.
    /// The primary key is stripped from the patch; a patch with nothing left
    /// is a successful no-op. Fails with [`AppError::NotFound`] when no row
    /// matches.
    pub async fn update<P: Serialize + Sync>(&self, id: &str, patch: &P) -> Result<(), AppError> {
        let schema = T::SCHEMA;
        let mut fields = to_object(patch)?;
        fields.remove(schema.primary_key);
        if fields.is_empty() {
            return Ok(());
        }

        let mut columns: Vec<(&Column, &Value)> = Vec::with_capacity(fields.len());
        for (key, value) in &fields {
            let column = schema
                .column(key)
                .ok_or_else(|| AppError::UnknownColumn(key.clone()))?;
            columns.push((column, value));
        }

        let assignments: Vec<String> = columns
            .iter()
            .map(|(c, _)| format!("{} = ?", c.name))
            .collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ?",
            schema.table,
            assignments.join(", "),
            schema.primary_key
        );

        let mut query = sqlx::query(&sql);
        for (column, value) in columns {
            query = bind_value(query, column, value)?;
        }
        let result = query.bind(id.to_string()).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// Upsert by primary key: insert when the id is absent, otherwise
    /// replace every non-id column with the supplied value.
    pub async fn set(&self, record: &T) -> Result<(), AppError> {
        let schema = T::SCHEMA;
        let map = to_object(record)?;
        check_columns(&schema, &map)?;

        let names: Vec<&str> = schema.columns.iter().map(|c| c.name).collect();
        let placeholders = vec!["?"; names.len()].join(", ");
        let assignments: Vec<String> = schema
            .columns
            .iter()
            .filter(|c| c.name != schema.primary_key)
            .map(|c| format!("{} = excluded.{}", c.name, c.name))
            .collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT({}) DO UPDATE SET {}",
            schema.table,
            names.join(", "),
            placeholders,
            schema.primary_key,
            assignments.join(", ")
        );

        let mut query = sqlx::query(&sql);
        for column in schema.columns {
            query = bind_value(query, column, map.get(column.name).unwrap_or(&Value::Null))?;
        }
        query.execute(&self.pool).await?;
        Ok(())
    }

    /// Deletes the row matching `id`; silent no-op when absent.
    pub async fn remove(&self, id: &str) -> Result<(), AppError> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = ?",
            T::SCHEMA.table,
            T::SCHEMA.primary_key
        );
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }
}

pub(crate) fn to_object(value: &impl Serialize) -> Result<Map<String, Value>, AppError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::BadRequest(format!(
            "expected an object payload, got {}",
            other
        ))),
    }
}

fn check_columns(schema: &TableSchema, record: &Map<String, Value>) -> Result<(), AppError> {
    for key in record.keys() {
        if schema.column(key).is_none() {
            return Err(AppError::UnknownColumn(key.clone()));
        }
    }
    Ok(())
}

/// Inserts one row with all descriptor columns present; a field missing from
/// `record` is stored as NULL. An id collision surfaces as a conflict, never
/// an overwrite.
pub(crate) async fn insert_row(
    pool: &SqlitePool,
    schema: &TableSchema,
    record: &Map<String, Value>,
) -> Result<(), AppError> {
    let names: Vec<&str> = schema.columns.iter().map(|c| c.name).collect();
    let placeholders = vec!["?"; names.len()].join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        schema.table,
        names.join(", "),
        placeholders
    );

    let mut query = sqlx::query(&sql);
    for column in schema.columns {
        query = bind_value(query, column, record.get(column.name).unwrap_or(&Value::Null))?;
    }
    query.execute(pool).await.map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            let id = record
                .get(schema.primary_key)
                .and_then(Value::as_str)
                .unwrap_or_default();
            AppError::Conflict(format!("{} row {} already exists", schema.table, id))
        }
        _ => AppError::Database(e),
    })?;
    Ok(())
}

fn bind_value<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    column: &Column,
    value: &Value,
) -> Result<Query<'q, Sqlite, SqliteArguments<'q>>, AppError> {
    let query = match (column.ty, value) {
        (_, Value::Null) => query.bind(None::<String>),
        (ColumnType::Text, Value::String(s)) => query.bind(s.clone()),
        (ColumnType::Integer, Value::Number(n)) => match n.as_i64() {
            Some(i) => query.bind(i),
            None => {
                return Err(AppError::BadRequest(format!(
                    "column {} expects an integer",
                    column.name
                )));
            }
        },
        (ColumnType::Real, Value::Number(n)) => match n.as_f64() {
            Some(f) => query.bind(f),
            None => {
                return Err(AppError::BadRequest(format!(
                    "column {} expects a number",
                    column.name
                )));
            }
        },
        (ColumnType::Boolean, Value::Bool(b)) => query.bind(*b),
        // Structured columns persist as JSON text.
        (ColumnType::Json, v) => query.bind(v.to_string()),
        (ty, other) => {
            return Err(AppError::BadRequest(format!(
                "column {} expects {:?}, got {}",
                column.name, ty, other
            )));
        }
    };
    Ok(query)
}

fn decode_row<T: Entity>(row: &SqliteRow) -> Result<T, AppError> {
    let schema = T::SCHEMA;
    let mut record = Map::new();
    for column in schema.columns {
        let value = match column.ty {
            ColumnType::Text => row
                .try_get::<Option<String>, _>(column.name)?
                .map(Value::String)
                .unwrap_or(Value::Null),
            ColumnType::Integer => row
                .try_get::<Option<i64>, _>(column.name)?
                .map(Value::from)
                .unwrap_or(Value::Null),
            ColumnType::Real => row
                .try_get::<Option<f64>, _>(column.name)?
                .map(Value::from)
                .unwrap_or(Value::Null),
            ColumnType::Boolean => row
                .try_get::<Option<bool>, _>(column.name)?
                .map(Value::Bool)
                .unwrap_or(Value::Null),
            ColumnType::Json => {
                // A corrupt structured column loads as an empty list so the
                // rest of the row stays available.
                match row.try_get::<Option<String>, _>(column.name)? {
                    Some(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                        error!(
                            "failed to parse {}.{} for row, substituting empty list: {}",
                            schema.table, column.name, e
                        );
                        Value::Array(Vec::new())
                    }),
                    None => Value::Array(Vec::new()),
                }
            }
        };
        record.insert(column.name.to_string(), value);
    }
    Ok(serde_json::from_value(Value::Object(record))?)
}
