use chrono::NaiveDate;

use crate::models::Event;

pub const FEATURED_LIMIT: usize = 3;
pub const UPCOMING_LIMIT: usize = 6;
pub const RELATED_LIMIT: usize = 3;

/// Featured events in source order, capped for the home page rail.
pub fn featured(events: &[Event]) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.is_featured)
        .take(FEATURED_LIMIT)
        .cloned()
        .collect()
}

/// Events strictly after `today`, ascending by date. Ties keep source order.
pub fn upcoming(events: &[Event], today: NaiveDate) -> Vec<Event> {
    let mut future: Vec<Event> = events
        .iter()
        .filter(|event| event.date > today)
        .cloned()
        .collect();
    future.sort_by_key(|event| event.date);
    future.truncate(UPCOMING_LIMIT);
    future
}

/// Other events sharing a category with `event`, in source order.
pub fn related(events: &[Event], event: &Event) -> Vec<Event> {
    events
        .iter()
        .filter(|other| other.id != event.id && other.category == event.category)
        .take(RELATED_LIMIT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_events;

    fn day(year: i32, month: u32, date: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, date).unwrap()
    }

    #[test]
    fn featured_caps_at_three_in_source_order() {
        let events = sample_events();
        let flagged = events.iter().filter(|e| e.is_featured).count();
        assert_eq!(flagged, 4, "sample set has more featured than the cap");

        let rail = featured(&events);
        let ids: Vec<&str> = rail.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["event-1", "event-2", "event-5"]);
    }

    #[test]
    fn upcoming_is_strictly_future_sorted_and_capped() {
        let events = sample_events();
        let today = day(2025, 6, 5); // event-7 falls exactly on this date

        let list = upcoming(&events, today);
        assert!(list.len() <= UPCOMING_LIMIT);
        assert!(list.iter().all(|e| e.date > today), "same-day events excluded");
        assert!(list.windows(2).all(|w| w[0].date <= w[1].date));

        let ids: Vec<&str> = list.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            ["event-1", "event-8", "event-2", "event-9", "event-5"]
        );
    }

    #[test]
    fn upcoming_caps_at_six() {
        let events = sample_events();
        // Before the whole sample set: all 9 are future, only 6 survive.
        let list = upcoming(&events, day(2025, 1, 1));
        assert_eq!(list.len(), UPCOMING_LIMIT);
    }

    #[test]
    fn related_shares_category_and_excludes_self() {
        let events = sample_events();
        let tech_conf = &events[0];

        let list = related(&events, tech_conf);
        let ids: Vec<&str> = list.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["event-9"]);

        let mixer = &events[3]; // only Networking event
        assert!(related(&events, mixer).is_empty());
    }
}
