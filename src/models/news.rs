use serde::{Deserialize, Serialize};

use crate::schema::{Column, ColumnType, TableSchema};
use crate::service::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNewsItem {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub source: String,
}

impl Entity for NewsItem {
    const SCHEMA: TableSchema = TableSchema {
        table: "news",
        singular: "news",
        primary_key: "id",
        columns: &[
            Column { name: "id", ty: ColumnType::Text },
            Column { name: "title", ty: ColumnType::Text },
            Column { name: "description", ty: ColumnType::Text },
            Column { name: "image_url", ty: ColumnType::Text },
            Column { name: "source", ty: ColumnType::Text },
        ],
    };

    fn id(&self) -> &str {
        &self.id
    }
}
