use serde::{Deserialize, Serialize};

use crate::schema::{Column, ColumnType, TableSchema};
use crate::service::Entity;

/// Campus event. `date`, `day` and `month` are pre-formatted display strings
/// written together by the form layer, never derived at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub day: String,
    pub month: String,
    pub location: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub day: String,
    pub month: String,
    pub location: String,
    pub image_url: String,
}

impl Entity for Event {
    const SCHEMA: TableSchema = TableSchema {
        table: "events",
        singular: "event",
        primary_key: "id",
        columns: &[
            Column { name: "id", ty: ColumnType::Text },
            Column { name: "title", ty: ColumnType::Text },
            Column { name: "date", ty: ColumnType::Text },
            Column { name: "day", ty: ColumnType::Text },
            Column { name: "month", ty: ColumnType::Text },
            Column { name: "location", ty: ColumnType::Text },
            Column { name: "image_url", ty: ColumnType::Text },
        ],
    };

    fn id(&self) -> &str {
        &self.id
    }
}
