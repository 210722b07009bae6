use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Event;

/// Sentinel meaning "no category constraint" in the category picker.
pub const ALL_CATEGORIES: &str = "All Categories";

pub const CATEGORIES: [&str; 8] = [
    "Concerts",
    "Conferences",
    "Workshops",
    "Sports",
    "Art & Theater",
    "Food & Drink",
    "Networking",
    "Family",
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FilterCriteria {
    pub keyword: String,
    pub category: String,
    pub location: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            category: ALL_CATEGORIES.to_string(),
            location: String::new(),
            start_date: String::new(),
        }
    }
}

impl FilterCriteria {
    /// Seed criteria from query-parameter style key/value pairs. Missing
    /// keys fall back to the no-constraint defaults.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        Self {
            keyword: params.get("keyword").cloned().unwrap_or(defaults.keyword),
            category: params.get("category").cloned().unwrap_or(defaults.category),
            location: params.get("location").cloned().unwrap_or(defaults.location),
            start_date: params
                .get("startDate")
                .cloned()
                .unwrap_or(defaults.start_date),
        }
    }

    /// Encode back into query parameters, omitting default-valued fields.
    pub fn to_query(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();
        if !self.keyword.is_empty() {
            params.insert("keyword".to_string(), self.keyword.clone());
        }
        if !self.category.is_empty() && self.category != ALL_CATEGORIES {
            params.insert("category".to_string(), self.category.clone());
        }
        if !self.location.is_empty() {
            params.insert("location".to_string(), self.location.clone());
        }
        if !self.start_date.is_empty() {
            params.insert("startDate".to_string(), self.start_date.clone());
        }
        params
    }

    /// Pure inclusion decision: every set constraint must pass.
    pub fn matches(&self, event: &Event) -> bool {
        if !self.keyword.is_empty() {
            let keyword = self.keyword.to_lowercase();
            if !event.title.to_lowercase().contains(&keyword)
                && !event.description.to_lowercase().contains(&keyword)
            {
                return false;
            }
        }

        if !self.category.is_empty()
            && self.category != ALL_CATEGORIES
            && event.category != self.category
        {
            return false;
        }

        if !self.location.is_empty()
            && !event
                .location
                .to_lowercase()
                .contains(&self.location.to_lowercase())
        {
            return false;
        }

        if !self.start_date.is_empty() {
            // An unparseable bound imposes no constraint. The bound date
            // itself passes; only strictly earlier events are excluded.
            if let Ok(start) = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d") {
                if event.date < start {
                    return false;
                }
            }
        }

        true
    }
}

/// Order-preserving subsequence of `events` that satisfies `criteria`.
pub fn apply(criteria: &FilterCriteria, events: &[Event]) -> Vec<Event> {
    events
        .iter()
        .filter(|event| criteria.matches(event))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_events;

    fn criteria() -> FilterCriteria {
        FilterCriteria::default()
    }

    #[test]
    fn empty_criteria_match_everything() {
        let events = sample_events();
        let c = criteria();
        assert!(events.iter().all(|e| c.matches(e)));
    }

    #[test]
    fn keyword_is_case_insensitive_over_title_and_description() {
        let events = sample_events();
        let mut c = criteria();
        c.keyword = "tech".to_string();
        assert!(c.matches(&events[0]), "matches title 'Tech Conference 2025'");

        c.keyword = "VINEYARDS".to_string();
        assert!(c.matches(&events[5]), "matches description of wine tasting");

        c.keyword = "zzz-not-there".to_string();
        assert!(events.iter().all(|e| !c.matches(e)));
    }

    #[test]
    fn category_is_exact_and_exclusive() {
        let events = sample_events();
        let mut c = criteria();
        c.category = "Sports".to_string();
        for event in &events {
            assert_eq!(c.matches(event), event.category == "Sports");
        }

        // Case-sensitive: "sports" is not "Sports".
        c.category = "sports".to_string();
        assert!(events.iter().all(|e| !c.matches(e)));
    }

    #[test]
    fn location_is_substring_case_insensitive() {
        let events = sample_events();
        let mut c = criteria();
        c.location = "san francisco".to_string();
        let hits: Vec<&str> = events
            .iter()
            .filter(|e| c.matches(e))
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(hits, ["event-1", "event-2"]);
    }

    #[test]
    fn start_date_excludes_strictly_earlier_events() {
        let events = sample_events();
        let mut c = criteria();
        c.start_date = "2025-06-15".to_string();

        // event-1 falls exactly on the bound and stays in.
        assert!(c.matches(&events[0]));
        // event-3 (2025-05-18) is earlier and drops out.
        assert!(!c.matches(&events[2]));
    }

    #[test]
    fn unparseable_start_date_imposes_no_constraint() {
        let events = sample_events();
        let mut c = criteria();
        c.start_date = "next tuesday".to_string();
        assert!(events.iter().all(|e| c.matches(e)));
    }

    #[test]
    fn apply_preserves_order_and_subset() {
        let events = sample_events();
        let mut c = criteria();
        c.category = "Conferences".to_string();

        let filtered = apply(&c, &events);
        let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["event-1", "event-9"]);
        assert!(filtered.iter().all(|f| events.contains(f)));
    }

    #[test]
    fn every_picker_category_has_sample_events() {
        let events = sample_events();
        for category in CATEGORIES {
            let mut c = criteria();
            c.category = category.to_string();
            assert!(
                events.iter().any(|e| c.matches(e)),
                "no events for {category}"
            );
        }
    }

    #[test]
    fn query_round_trip_omits_defaults() {
        let mut c = criteria();
        assert!(c.to_query().is_empty());

        c.keyword = "music".to_string();
        c.start_date = "2025-07-01".to_string();
        let params = c.to_query();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("keyword").unwrap(), "music");
        assert_eq!(params.get("startDate").unwrap(), "2025-07-01");
        assert!(!params.contains_key("category"));

        assert_eq!(FilterCriteria::from_query(&params), c);
    }
}
