use crate::auth::AuthService;
use crate::models::{Event, Hostel, Job, NewsItem, RoommateProfile, University};
use crate::service::RecordService;
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            auth: AuthService::new(),
        }
    }

    // The five domain bindings, plus the read-only university catalog.
    // Configuration, not logic: the structured-column sets live in each
    // entity's schema descriptor.

    pub fn universities(&self) -> RecordService<University> {
        RecordService::new(&self.store)
    }

    pub fn hostels(&self) -> RecordService<Hostel> {
        RecordService::new(&self.store)
    }

    pub fn news(&self) -> RecordService<NewsItem> {
        RecordService::new(&self.store)
    }

    pub fn events(&self) -> RecordService<Event> {
        RecordService::new(&self.store)
    }

    pub fn jobs(&self) -> RecordService<Job> {
        RecordService::new(&self.store)
    }

    pub fn profiles(&self) -> RecordService<RoommateProfile> {
        RecordService::new(&self.store)
    }
}
