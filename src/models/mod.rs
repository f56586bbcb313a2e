pub mod event;
pub mod hostel;
pub mod job;
pub mod news;
pub mod profile;
pub mod university;
pub mod user;

pub use event::{Event, NewEvent};
pub use hostel::{Amenity, Hostel, NewHostel};
pub use job::{Job, JobType, NewJob};
pub use news::{NewNewsItem, NewsItem};
pub use profile::{
    Cleanliness, DrinkingHabit, Gender, GuestFrequency, LeaseDuration, RoommateProfile,
    SeekingGender, StudySchedule,
};
pub use university::University;
pub use user::User;
