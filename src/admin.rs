//! Adapter between the record service and the management surface, which
//! speaks in two shapes only: payloads without an id for add, and id-bearing
//! full records for update. Field validation stays with the form layer.

use serde::Serialize;

use crate::error::AppError;
use crate::service::{Entity, RecordService};
use crate::store::Store;

pub struct AdminHandler<T: Entity> {
    service: RecordService<T>,
}

impl<T: Entity> AdminHandler<T> {
    pub fn new(store: &Store) -> Self {
        Self {
            service: RecordService::new(store),
        }
    }

    pub async fn add<D: Serialize + Sync>(&self, draft: &D) -> Result<T, AppError> {
        self.service.add(draft).await
    }

    /// Takes the id from the record itself and updates the remaining fields.
    pub async fn update(&self, record: &T) -> Result<(), AppError> {
        let id = record.id().to_owned();
        self.service.update(&id, record).await
    }

    pub async fn remove(&self, id: &str) -> Result<(), AppError> {
        self.service.remove(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Event, NewEvent};

    #[tokio::test]
    async fn test_add_update_remove_flow() {
        let store = Store::open_in_memory().await.expect("Failed to open store");
        let handler = AdminHandler::<Event>::new(&store);
        let events = RecordService::<Event>::new(&store);

        let added = handler
            .add(&NewEvent {
                title: "Careers Fair".to_string(),
                date: "October 2, 2024".to_string(),
                day: "02".to_string(),
                month: "OCT".to_string(),
                location: "MUBS Main Hall".to_string(),
                image_url: "https://example.com/fair.jpg".to_string(),
            })
            .await
            .expect("add");
        assert_eq!(events.get_all().await.expect("fetch").len(), 4);

        let mut record = added.clone();
        record.title = "Careers Fair 2024".to_string();
        handler.update(&record).await.expect("update");

        let all = events.get_all().await.expect("fetch");
        let updated = all.iter().find(|e| e.id == added.id).expect("row");
        assert_eq!(updated.title, "Careers Fair 2024");
        assert_eq!(updated.location, "MUBS Main Hall");

        handler.remove(&added.id).await.expect("remove");
        assert_eq!(events.get_all().await.expect("fetch").len(), 3);
    }

    #[tokio::test]
    async fn test_update_uses_the_embedded_id() {
        let store = Store::open_in_memory().await.expect("Failed to open store");
        let handler = AdminHandler::<Event>::new(&store);
        let events = RecordService::<Event>::new(&store);

        let mut record = events
            .get_all()
            .await
            .expect("fetch")
            .into_iter()
            .find(|e| e.id == "event-2")
            .expect("event-2");
        record.location = "Kyambogo Main Grounds".to_string();
        handler.update(&record).await.expect("update");

        let all = events.get_all().await.expect("fetch");
        let updated = all.iter().find(|e| e.id == "event-2").expect("event-2");
        assert_eq!(updated.location, "Kyambogo Main Grounds");
    }
}
