use serde::{Deserialize, Serialize};

use crate::schema::{Column, ColumnType, TableSchema};
use crate::service::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeekingGender {
    Male,
    Female,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaseDuration {
    Semester,
    #[serde(rename = "Full Year")]
    FullYear,
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrinkingHabit {
    Socially,
    Rarely,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudySchedule {
    #[serde(rename = "Early Bird")]
    EarlyBird,
    #[serde(rename = "Night Owl")]
    NightOwl,
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cleanliness {
    Tidy,
    Average,
    Relaxed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuestFrequency {
    Rarely,
    Sometimes,
    Often,
}

/// Roommate-matching profile. The id is the owning user's id, so there is at
/// most one profile per user; writes go through the upsert (`set`) path and
/// replace every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoommateProfile {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub age: u32,
    pub gender: Gender,
    pub university_id: String,
    pub course: String,
    pub year_of_study: u32,
    /// UGX per month.
    pub budget: f64,
    /// YYYY-MM-DD.
    pub move_in_date: String,
    pub lease_duration: LeaseDuration,
    pub bio: String,
    pub is_smoker: bool,
    pub drinks_alcohol: DrinkingHabit,
    pub study_schedule: StudySchedule,
    pub cleanliness: Cleanliness,
    pub guest_frequency: GuestFrequency,
    /// Comma-separated free text.
    pub hobbies: String,
    pub seeking_gender: SeekingGender,
}

impl Entity for RoommateProfile {
    const SCHEMA: TableSchema = TableSchema {
        table: "roommate_profiles",
        singular: "profile",
        primary_key: "id",
        columns: &[
            Column { name: "id", ty: ColumnType::Text },
            Column { name: "name", ty: ColumnType::Text },
            Column { name: "image_url", ty: ColumnType::Text },
            Column { name: "age", ty: ColumnType::Integer },
            Column { name: "gender", ty: ColumnType::Text },
            Column { name: "university_id", ty: ColumnType::Text },
            Column { name: "course", ty: ColumnType::Text },
            Column { name: "year_of_study", ty: ColumnType::Integer },
            Column { name: "budget", ty: ColumnType::Real },
            Column { name: "move_in_date", ty: ColumnType::Text },
            Column { name: "lease_duration", ty: ColumnType::Text },
            Column { name: "bio", ty: ColumnType::Text },
            Column { name: "is_smoker", ty: ColumnType::Boolean },
            Column { name: "drinks_alcohol", ty: ColumnType::Text },
            Column { name: "study_schedule", ty: ColumnType::Text },
            Column { name: "cleanliness", ty: ColumnType::Text },
            Column { name: "guest_frequency", ty: ColumnType::Text },
            Column { name: "hobbies", ty: ColumnType::Text },
            Column { name: "seeking_gender", ty: ColumnType::Text },
        ],
    };

    fn id(&self) -> &str {
        &self.id
    }
}
