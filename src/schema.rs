//! Table descriptors for the embedded store.
//!
//! Every table the store carries is described by a [`TableSchema`]: its name,
//! primary key, the id prefix used for synthesized ids, and a typed column
//! list. All SQL in the record service is generated from these descriptors,
//! and every incoming field name is checked against them, so no caller input
//! ever reaches a query string.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Integer,
    Real,
    /// Stored as 0/1, surfaced as a native bool.
    Boolean,
    /// A structured (list/object) value persisted as JSON text.
    Json,
}

impl ColumnType {
    fn sql_type(self) -> &'static str {
        match self {
            ColumnType::Text | ColumnType::Json => "TEXT",
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Boolean => "BOOLEAN",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
}

#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub table: &'static str,
    /// Singular form of the table name, prefixed onto synthesized ids.
    pub singular: &'static str,
    pub primary_key: &'static str,
    pub columns: &'static [Column],
}

impl TableSchema {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn create_table_sql(&self) -> String {
        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|c| {
                if c.name == self.primary_key {
                    format!("{} {} PRIMARY KEY", c.name, c.ty.sql_type())
                } else {
                    format!("{} {}", c.name, c.ty.sql_type())
                }
            })
            .collect();
        format!("CREATE TABLE {} ({})", self.table, columns.join(", "))
    }
}
