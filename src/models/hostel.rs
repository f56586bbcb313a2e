use serde::{Deserialize, Serialize};

use crate::schema::{Column, ColumnType, TableSchema};
use crate::service::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub name: String,
    /// Icon class rendered by the client.
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hostel {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Free-text range, e.g. "1.2M - 1.8M".
    pub price_range: String,
    pub image_url: String,
    /// 0.0 to 5.0.
    pub rating: f64,
    pub university_id: String,
    pub description: String,
    pub amenities: Vec<Amenity>,
    pub is_recommended: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHostel {
    pub name: String,
    pub location: String,
    pub price_range: String,
    pub image_url: String,
    pub rating: f64,
    pub university_id: String,
    pub description: String,
    pub amenities: Vec<Amenity>,
    pub is_recommended: bool,
}

impl Entity for Hostel {
    const SCHEMA: TableSchema = TableSchema {
        table: "hostels",
        singular: "hostel",
        primary_key: "id",
        columns: &[
            Column { name: "id", ty: ColumnType::Text },
            Column { name: "name", ty: ColumnType::Text },
            Column { name: "location", ty: ColumnType::Text },
            Column { name: "price_range", ty: ColumnType::Text },
            Column { name: "image_url", ty: ColumnType::Text },
            Column { name: "rating", ty: ColumnType::Real },
            Column { name: "university_id", ty: ColumnType::Text },
            Column { name: "description", ty: ColumnType::Text },
            Column { name: "amenities", ty: ColumnType::Json },
            Column { name: "is_recommended", ty: ColumnType::Boolean },
        ],
    };

    fn id(&self) -> &str {
        &self.id
    }
}
