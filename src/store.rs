use std::time::Duration;

use chrono::NaiveDate;
use thiserror::Error;
use tokio::time::sleep;

use crate::models::{Event, Organizer};

const FETCH_ALL_DELAY: Duration = Duration::from_millis(800);
const FETCH_BY_ID_DELAY: Duration = Duration::from_millis(600);

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("event not found: {0}")]
    NotFound(String),
    #[error("event store unreachable")]
    Unreachable,
}

/// In-memory stand-in for a remote event catalog. Every read suspends for a
/// fixed delay to mimic a network round trip.
pub struct EventStore {
    events: Vec<Event>,
    simulate_latency: bool,
    online: bool,
}

impl EventStore {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            simulate_latency: true,
            online: true,
        }
    }

    pub fn with_sample_events() -> Self {
        Self::new(sample_events())
    }

    /// Store that fails every read, for exercising fetch-failure paths.
    pub fn unreachable() -> Self {
        Self {
            events: Vec::new(),
            simulate_latency: false,
            online: false,
        }
    }

    pub fn without_latency(mut self) -> Self {
        self.simulate_latency = false;
        self
    }

    pub async fn fetch_all(&self) -> Result<Vec<Event>, StoreError> {
        self.delay(FETCH_ALL_DELAY).await;
        if !self.online {
            return Err(StoreError::Unreachable);
        }
        Ok(self.events.clone())
    }

    pub async fn fetch_by_id(&self, id: &str) -> Result<Event, StoreError> {
        self.delay(FETCH_BY_ID_DELAY).await;
        if !self.online {
            return Err(StoreError::Unreachable);
        }
        self.events
            .iter()
            .find(|event| event.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn delay(&self, duration: Duration) {
        if self.simulate_latency {
            sleep(duration).await;
        }
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

pub fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: "event-1".to_string(),
            title: "Tech Conference 2025".to_string(),
            description: "Join us for the biggest tech conference of the year. Network with industry leaders, attend workshops, and learn about the latest technology trends.\n\nThis three-day event features keynote speeches, hands-on workshops, networking opportunities, and much more.".to_string(),
            date: seed_date(2025, 6, 15),
            time: "09:00 AM - 06:00 PM".to_string(),
            location: "San Francisco Convention Center".to_string(),
            price: 299.0,
            category: "Conferences".to_string(),
            image: "https://images.pexels.com/photos/2774556/pexels-photo-2774556.jpeg?auto=compress&cs=tinysrgb&w=1600".to_string(),
            attendees: Some(1200),
            is_featured: true,
            organizer: Some(Organizer {
                name: "TechEvents Inc.".to_string(),
                email: "info@techevents.com".to_string(),
            }),
        },
        Event {
            id: "event-2".to_string(),
            title: "Summer Music Festival".to_string(),
            description: "Experience the ultimate summer festival with performances from top artists across multiple genres. Food, drinks, and unforgettable memories await!".to_string(),
            date: seed_date(2025, 7, 20),
            time: "12:00 PM - 11:00 PM".to_string(),
            location: "Golden Gate Park, San Francisco".to_string(),
            price: 89.99,
            category: "Concerts".to_string(),
            image: "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg?auto=compress&cs=tinysrgb&w=1600".to_string(),
            attendees: Some(5000),
            is_featured: true,
            organizer: None,
        },
        Event {
            id: "event-3".to_string(),
            title: "UX/UI Design Workshop".to_string(),
            description: "Learn practical UX/UI design skills in this intensive workshop. Perfect for beginners and intermediate designers looking to level up their skills.".to_string(),
            date: seed_date(2025, 5, 18),
            time: "10:00 AM - 04:00 PM".to_string(),
            location: "Design Hub, 123 Creative St".to_string(),
            price: 149.0,
            category: "Workshops".to_string(),
            image: "https://images.pexels.com/photos/7256897/pexels-photo-7256897.jpeg?auto=compress&cs=tinysrgb&w=1600".to_string(),
            attendees: Some(30),
            is_featured: false,
            organizer: Some(Organizer {
                name: "Design Academy".to_string(),
                email: "workshops@designacademy.com".to_string(),
            }),
        },
        Event {
            id: "event-4".to_string(),
            title: "Startup Networking Mixer".to_string(),
            description: "Connect with founders, investors, and talent at our monthly startup mixer. Build valuable relationships in a relaxed environment.".to_string(),
            date: seed_date(2025, 4, 25),
            time: "06:30 PM - 09:30 PM".to_string(),
            location: "Startup Hub, 456 Innovation Ave".to_string(),
            price: 0.0,
            category: "Networking".to_string(),
            image: "https://images.pexels.com/photos/7642001/pexels-photo-7642001.jpeg?auto=compress&cs=tinysrgb&w=1600".to_string(),
            attendees: Some(75),
            is_featured: false,
            organizer: None,
        },
        Event {
            id: "event-5".to_string(),
            title: "Marathon for Charity".to_string(),
            description: "Run for a cause! Join our annual charity marathon and help raise funds for local community projects. All fitness levels welcome.".to_string(),
            date: seed_date(2025, 9, 10),
            time: "07:00 AM - 12:00 PM".to_string(),
            location: "City Park".to_string(),
            price: 25.0,
            category: "Sports".to_string(),
            image: "https://images.pexels.com/photos/2774589/pexels-photo-2774589.jpeg?auto=compress&cs=tinysrgb&w=1600".to_string(),
            attendees: Some(500),
            is_featured: true,
            organizer: None,
        },
        Event {
            id: "event-6".to_string(),
            title: "Wine Tasting Experience".to_string(),
            description: "Sample premium wines from local vineyards paired with gourmet appetizers. A sophisticated evening for wine enthusiasts.".to_string(),
            date: seed_date(2025, 5, 30),
            time: "07:00 PM - 10:00 PM".to_string(),
            location: "Vineyard Estates, Napa Valley".to_string(),
            price: 75.0,
            category: "Food & Drink".to_string(),
            image: "https://images.pexels.com/photos/696218/pexels-photo-696218.jpeg?auto=compress&cs=tinysrgb&w=1600".to_string(),
            attendees: Some(50),
            is_featured: false,
            organizer: None,
        },
        Event {
            id: "event-7".to_string(),
            title: "Art Exhibition Opening".to_string(),
            description: "Be among the first to see this groundbreaking exhibition featuring works from emerging artists. Includes a meet-and-greet with the artists.".to_string(),
            date: seed_date(2025, 6, 5),
            time: "06:00 PM - 09:00 PM".to_string(),
            location: "Modern Art Gallery, Downtown".to_string(),
            price: 15.0,
            category: "Art & Theater".to_string(),
            image: "https://images.pexels.com/photos/1509534/pexels-photo-1509534.jpeg?auto=compress&cs=tinysrgb&w=1600".to_string(),
            attendees: Some(120),
            is_featured: false,
            organizer: None,
        },
        Event {
            id: "event-8".to_string(),
            title: "Family Fun Day".to_string(),
            description: "A day packed with activities for the whole family including games, rides, food, and entertainment. Create lasting memories together!".to_string(),
            date: seed_date(2025, 7, 4),
            time: "10:00 AM - 06:00 PM".to_string(),
            location: "Community Park".to_string(),
            price: 0.0,
            category: "Family".to_string(),
            image: "https://images.pexels.com/photos/1157557/pexels-photo-1157557.jpeg?auto=compress&cs=tinysrgb&w=1600".to_string(),
            attendees: Some(300),
            is_featured: true,
            organizer: None,
        },
        Event {
            id: "event-9".to_string(),
            title: "JavaScript Developer Conference".to_string(),
            description: "Stay on top of the latest JavaScript frameworks and tools. Two days of technical talks, code workshops, and networking.".to_string(),
            date: seed_date(2025, 8, 15),
            time: "09:00 AM - 05:00 PM".to_string(),
            location: "Tech Campus, Building 4".to_string(),
            price: 199.0,
            category: "Conferences".to_string(),
            image: "https://images.pexels.com/photos/5380664/pexels-photo-5380664.jpeg?auto=compress&cs=tinysrgb&w=1600".to_string(),
            attendees: Some(400),
            is_featured: false,
            organizer: Some(Organizer {
                name: "JS Community".to_string(),
                email: "conference@jscommunity.org".to_string(),
            }),
        },
    ]
}
