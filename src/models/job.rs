use serde::{Deserialize, Serialize};

use crate::schema::{Column, ColumnType, TableSchema};
use crate::service::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Internship,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    /// Free-text deadline, e.g. "Aug 25th".
    pub deadline: String,
    pub company: String,
    pub image_url: String,
    pub location: String,
    pub job_type: JobType,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub qualifications: Vec<String>,
    /// Link to the application page.
    pub how_to_apply: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub deadline: String,
    pub company: String,
    pub image_url: String,
    pub location: String,
    pub job_type: JobType,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub qualifications: Vec<String>,
    pub how_to_apply: String,
}

impl Entity for Job {
    const SCHEMA: TableSchema = TableSchema {
        table: "jobs",
        singular: "job",
        primary_key: "id",
        columns: &[
            Column { name: "id", ty: ColumnType::Text },
            Column { name: "title", ty: ColumnType::Text },
            Column { name: "deadline", ty: ColumnType::Text },
            Column { name: "company", ty: ColumnType::Text },
            Column { name: "image_url", ty: ColumnType::Text },
            Column { name: "location", ty: ColumnType::Text },
            Column { name: "job_type", ty: ColumnType::Text },
            Column { name: "description", ty: ColumnType::Text },
            Column { name: "responsibilities", ty: ColumnType::Json },
            Column { name: "qualifications", ty: ColumnType::Json },
            Column { name: "how_to_apply", ty: ColumnType::Text },
        ],
    };

    fn id(&self) -> &str {
        &self.id
    }
}
