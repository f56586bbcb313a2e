//! Static seed corpus. The store is rebuilt from these records on every
//! startup; nothing here survives a restart.

use crate::models::{
    Amenity, Cleanliness, DrinkingHabit, Event, Gender, GuestFrequency, Hostel, Job, JobType,
    LeaseDuration, NewsItem, RoommateProfile, SeekingGender, StudySchedule, University,
};

pub fn universities() -> Vec<University> {
    [
        ("makerere", "Makerere"),
        ("kyambogo", "Kyambogo"),
        ("mubs", "MUBS"),
        ("must", "MUST"),
        ("ucu", "UCU"),
        ("kiu", "KIU"),
        ("ndejje", "Ndejje"),
        ("umu", "UMU Nkozi"),
        ("gulu", "Gulu"),
        ("lira", "Lira"),
    ]
    .into_iter()
    .map(|(id, name)| University {
        id: id.into(),
        name: name.into(),
        logo_url: format!("https://picsum.photos/seed/{}/40/40", id),
    })
    .collect()
}

fn amenity(name: &str, icon: &str) -> Amenity {
    Amenity {
        name: name.into(),
        icon: icon.into(),
    }
}

pub fn hostels() -> Vec<Hostel> {
    vec![
        Hostel {
            id: "hostel-1".into(),
            name: "Olympia Hostel".into(),
            location: "Kikoni, Makerere".into(),
            price_range: "1.2M - 1.8M".into(),
            image_url: "https://picsum.photos/seed/olympia/400/300".into(),
            rating: 4.5,
            university_id: "makerere".into(),
            description: "A premium hostel with modern facilities, including a swimming pool \
                          and gym. Known for its vibrant community and excellent security."
                .into(),
            amenities: vec![
                amenity("WiFi", "fas fa-wifi"),
                amenity("Shuttle", "fas fa-bus"),
                amenity("DSTV", "fas fa-tv"),
                amenity("Security", "fas fa-shield-alt"),
                amenity("Pool", "fas fa-swimmer"),
                amenity("Gym", "fas fa-dumbbell"),
            ],
            is_recommended: true,
        },
        Hostel {
            id: "hostel-2".into(),
            name: "Nana Hostel".into(),
            location: "Kikoni, Makerere".into(),
            price_range: "800K - 1.4M".into(),
            image_url: "https://picsum.photos/seed/nana/400/300".into(),
            rating: 4.2,
            university_id: "makerere".into(),
            description: "A popular choice for students seeking a balance of comfort and \
                          affordability. Close to the western gate."
                .into(),
            amenities: vec![
                amenity("WiFi", "fas fa-wifi"),
                amenity("Shuttle", "fas fa-bus"),
                amenity("DSTV", "fas fa-tv"),
                amenity("Security", "fas fa-shield-alt"),
            ],
            is_recommended: false,
        },
        Hostel {
            id: "hostel-3".into(),
            name: "Bavos Hostel".into(),
            location: "Banda, Kyambogo".into(),
            price_range: "600K - 1M".into(),
            image_url: "https://picsum.photos/seed/bavos/400/300".into(),
            rating: 3.9,
            university_id: "kyambogo".into(),
            description: "Offers spacious rooms and a quiet environment conducive for \
                          studying. Located along the main road for easy access."
                .into(),
            amenities: vec![
                amenity("WiFi", "fas fa-wifi"),
                amenity("Security", "fas fa-shield-alt"),
                amenity("Water", "fas fa-shower"),
            ],
            is_recommended: true,
        },
        Hostel {
            id: "hostel-4".into(),
            name: "Akamwesi Hostel".into(),
            location: "Wandegeya, Makerere".into(),
            price_range: "900K - 1.5M".into(),
            image_url: "https://picsum.photos/seed/akamwesi/400/300".into(),
            rating: 4.3,
            university_id: "mubs".into(),
            description: "Famous for its social life and proximity to campus. Features a \
                          restaurant and a rooftop terrace."
                .into(),
            amenities: vec![
                amenity("WiFi", "fas fa-wifi"),
                amenity("Shuttle", "fas fa-bus"),
                amenity("DSTV", "fas fa-tv"),
                amenity("Security", "fas fa-shield-alt"),
                amenity("Restaurant", "fas fa-utensils"),
            ],
            is_recommended: true,
        },
    ]
}

pub fn news_items() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: "news-1".into(),
            title: "Makerere University Guild Elections Conclude".into(),
            description: "New student leaders elected in a peaceful process.".into(),
            image_url: "https://picsum.photos/seed/makenews/100/100".into(),
            source: "Campus Bee".into(),
        },
        NewsItem {
            id: "news-2".into(),
            title: "Kyambogo University Releases Exam Timetable".into(),
            description: "Students advised to check the university portal for their schedules."
                .into(),
            image_url: "https://picsum.photos/seed/kyambogonews/100/100".into(),
            source: "University Portal".into(),
        },
        NewsItem {
            id: "news-3".into(),
            title: "MUBS Hosts Annual Entrepreneurship Gala".into(),
            description: "Students showcase innovative business ideas to a panel of investors."
                .into(),
            image_url: "https://picsum.photos/seed/mubsnews/100/100".into(),
            source: "New Vision".into(),
        },
    ]
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "event-1".into(),
            title: "Tech Fest 2024".into(),
            date: "August 15, 2024".into(),
            day: "15".into(),
            month: "AUG".into(),
            location: "Makerere University, CTF Auditorium".into(),
            image_url: "https://picsum.photos/seed/event1/400/300".into(),
        },
        Event {
            id: "event-2".into(),
            title: "Kyambogo Cultural Day".into(),
            date: "September 5, 2024".into(),
            day: "05".into(),
            month: "SEP".into(),
            location: "Kyambogo Cricket Oval".into(),
            image_url: "https://picsum.photos/seed/event2/400/300".into(),
        },
        Event {
            id: "event-3".into(),
            title: "Inter-Hostel Football Finals".into(),
            date: "August 28, 2024".into(),
            day: "28".into(),
            month: "AUG".into(),
            location: "Makerere University Sports Grounds".into(),
            image_url: "https://picsum.photos/seed/event3/400/300".into(),
        },
    ]
}

pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: "job-1".into(),
            title: "Graduate Trainee - Audit".into(),
            deadline: "Aug 25th".into(),
            company: "Deloitte".into(),
            image_url: "https://picsum.photos/seed/deloitte/80/80".into(),
            location: "Kampala, Uganda".into(),
            job_type: JobType::FullTime,
            description: "Join our dynamic audit team as a Graduate Trainee. This is an \
                          excellent opportunity for recent graduates to kickstart their career \
                          in a leading professional services firm. You will gain hands-on \
                          experience in financial auditing across various industries."
                .into(),
            responsibilities: vec![
                "Assisting in the planning and execution of audit engagements.".into(),
                "Evaluating internal controls and identifying areas of risk.".into(),
                "Preparing audit work papers and documenting findings.".into(),
                "Communicating audit results to senior team members.".into(),
            ],
            qualifications: vec![
                "Bachelors degree in Accounting, Finance, or a related field.".into(),
                "Strong analytical and problem-solving skills.".into(),
                "Excellent communication and interpersonal skills.".into(),
                "A high level of integrity and professionalism.".into(),
            ],
            how_to_apply: "#".into(),
        },
        Job {
            id: "job-2".into(),
            title: "Marketing Intern".into(),
            deadline: "Sep 1st".into(),
            company: "MTN".into(),
            image_url: "https://picsum.photos/seed/mtn/80/80".into(),
            location: "Kampala, Uganda".into(),
            job_type: JobType::Internship,
            description: "We are looking for an enthusiastic marketing intern to join our \
                          marketing department and provide creative ideas to help achieve our \
                          goals. You will have administrative duties in developing and \
                          implementing marketing strategies."
                .into(),
            responsibilities: vec![
                "Support the marketing team in daily administrative tasks.".into(),
                "Assist in marketing and advertising promotional activities (e.g. social \
                 media, direct mail, and web)."
                    .into(),
                "Help distribute marketing materials.".into(),
                "Help organize marketing events.".into(),
            ],
            qualifications: vec![
                "Current enrollment in a related BS or Masters degree.".into(),
                "Strong desire to learn along with professional drive.".into(),
                "Solid understanding of different marketing techniques.".into(),
                "Excellent verbal and written communication skills.".into(),
            ],
            how_to_apply: "#".into(),
        },
        Job {
            id: "job-3".into(),
            title: "Research Assistant (Part-Time)".into(),
            deadline: "Aug 20th".into(),
            company: "Makerere School of Public Health".into(),
            image_url: "https://picsum.photos/seed/makerere/80/80".into(),
            location: "Kampala, Uganda (Remote option available)".into(),
            job_type: JobType::PartTime,
            description: "The School of Public Health is seeking a part-time Research \
                          Assistant to support an ongoing project. The ideal candidate will be \
                          meticulous, organized, and have a passion for public health research."
                .into(),
            responsibilities: vec![
                "Conducting literature reviews.".into(),
                "Collecting and analyzing data.".into(),
                "Preparing materials for submission to granting agencies and foundations."
                    .into(),
                "Assisting with the preparation of manuscripts for publication.".into(),
            ],
            qualifications: vec![
                "Currently pursuing a degree in Public Health, Social Sciences, or a related \
                 field."
                    .into(),
                "Strong organizational skills and attention to detail.".into(),
                "Experience with data collection and analysis is a plus.".into(),
                "Ability to work independently and as part of a team.".into(),
            ],
            how_to_apply: "#".into(),
        },
    ]
}

pub fn roommate_profiles() -> Vec<RoommateProfile> {
    vec![
        RoommateProfile {
            id: "profile-1".into(),
            name: "Sarah".into(),
            image_url: "https://picsum.photos/seed/sarah/400/400".into(),
            age: 21,
            gender: Gender::Female,
            university_id: "makerere".into(),
            course: "Law".into(),
            year_of_study: 3,
            budget: 900_000.0,
            move_in_date: "2024-08-01".into(),
            lease_duration: LeaseDuration::FullYear,
            bio: "I am a quiet and focused law student. I enjoy reading, debating, and \
                  keeping my space clean. Looking for a respectful and tidy roommate."
                .into(),
            is_smoker: false,
            drinks_alcohol: DrinkingHabit::Rarely,
            study_schedule: StudySchedule::NightOwl,
            cleanliness: Cleanliness::Tidy,
            guest_frequency: GuestFrequency::Rarely,
            hobbies: "Reading, Chess, Volunteering".into(),
            seeking_gender: SeekingGender::Female,
        },
        RoommateProfile {
            id: "profile-2".into(),
            name: "John".into(),
            image_url: "https://picsum.photos/seed/john/400/400".into(),
            age: 20,
            gender: Gender::Male,
            university_id: "kyambogo".into(),
            course: "Civil Engineering".into(),
            year_of_study: 2,
            budget: 700_000.0,
            move_in_date: "2024-08-15".into(),
            lease_duration: LeaseDuration::Semester,
            bio: "Easy-going and friendly engineering student. I love football, video games, \
                  and hanging out with friends on weekends. I am reasonably clean and respect \
                  personal space."
                .into(),
            is_smoker: false,
            drinks_alcohol: DrinkingHabit::Socially,
            study_schedule: StudySchedule::EarlyBird,
            cleanliness: Cleanliness::Average,
            guest_frequency: GuestFrequency::Sometimes,
            hobbies: "Football, FIFA, Movies".into(),
            seeking_gender: SeekingGender::Any,
        },
        RoommateProfile {
            id: "profile-3".into(),
            name: "Brenda".into(),
            image_url: "https://picsum.photos/seed/brenda/400/400".into(),
            age: 22,
            gender: Gender::Female,
            university_id: "mubs".into(),
            course: "Business Administration".into(),
            year_of_study: 4,
            budget: 1_200_000.0,
            move_in_date: "2024-09-01".into(),
            lease_duration: LeaseDuration::Flexible,
            bio: "Final year BBA student. I'm social, love exploring new cafes, and enjoy \
                  cooking. Looking for a fun and mature roommate to share a nice place with."
                .into(),
            is_smoker: false,
            drinks_alcohol: DrinkingHabit::Socially,
            study_schedule: StudySchedule::Flexible,
            cleanliness: Cleanliness::Average,
            guest_frequency: GuestFrequency::Sometimes,
            hobbies: "Cooking, Fashion, Travel".into(),
            seeking_gender: SeekingGender::Female,
        },
    ]
}
