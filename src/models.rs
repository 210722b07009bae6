use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Organizer {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Event {
    pub id: String, // unique across the full event set
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String, // display-only, never machine-parsed
    pub location: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<u32>,
    #[serde(rename = "isFeatured")]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<Organizer>,
}

impl Event {
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    /// Sidebar price text: free admission reads "Free", never "$0".
    pub fn price_label(&self) -> String {
        if self.is_free() {
            "Free".to_string()
        } else {
            format!("${}", self.price)
        }
    }
}
