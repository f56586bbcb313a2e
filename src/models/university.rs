use serde::{Deserialize, Serialize};

use crate::schema::{Column, ColumnType, TableSchema};
use crate::service::Entity;

/// Immutable campus catalog; seeded once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: String,
    pub name: String,
    pub logo_url: String,
}

impl Entity for University {
    const SCHEMA: TableSchema = TableSchema {
        table: "universities",
        singular: "university",
        primary_key: "id",
        columns: &[
            Column { name: "id", ty: ColumnType::Text },
            Column { name: "name", ty: ColumnType::Text },
            Column { name: "logo_url", ty: ColumnType::Text },
        ],
    };

    fn id(&self) -> &str {
        &self.id
    }
}
