use std::collections::HashMap;

use chrono::Utc;

use crate::auth::{AuthService, SessionStore};
use crate::filter::{self, FilterCriteria};
use crate::models::Event;
use crate::store::{EventStore, StoreError};
use crate::validate::{
    validate_login, validate_signup, FieldError, LoginInput, SignupInput,
};
use crate::views;

#[derive(Debug)]
pub enum ListingState {
    Loading,
    Loaded { all: Vec<Event>, visible: Vec<Event> },
    // Terminal for this page instance, no automatic retry.
    Failed(StoreError),
}

/// The events listing page: one fetch per page load, then re-filterable
/// against the loaded set.
pub struct EventsPage {
    criteria: FilterCriteria,
    state: ListingState,
}

impl EventsPage {
    pub fn new() -> Self {
        Self::with_criteria(FilterCriteria::default())
    }

    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            state: ListingState::Loading,
        }
    }

    /// Seed initial criteria from the page's query parameters.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        Self::with_criteria(FilterCriteria::from_query(params))
    }

    pub async fn load(&mut self, store: &EventStore) {
        match store.fetch_all().await {
            Ok(all) => {
                let visible = filter::apply(&self.criteria, &all);
                self.state = ListingState::Loaded { all, visible };
            }
            Err(err) => {
                tracing::warn!("event fetch failed: {err}");
                self.state = ListingState::Failed(err);
            }
        }
    }

    /// Apply new criteria against the already-loaded set and return the
    /// query parameters to publish in the page address.
    pub fn search(&mut self, criteria: FilterCriteria) -> HashMap<String, String> {
        self.criteria = criteria;
        if let ListingState::Loaded { all, visible } = &mut self.state {
            *visible = filter::apply(&self.criteria, all);
        }
        self.criteria.to_query()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// The filtered subset, once loaded. `Some(&[])` is a valid empty
    /// result, distinct from a pending or failed load.
    pub fn visible(&self) -> Option<&[Event]> {
        match &self.state {
            ListingState::Loaded { visible, .. } => Some(visible),
            _ => None,
        }
    }

    pub fn result_summary(&self) -> Option<String> {
        let visible = self.visible()?;
        Some(match visible.len() {
            0 => "No events found".to_string(),
            1 => "Found 1 event".to_string(),
            n => format!("Found {n} events"),
        })
    }
}

impl Default for EventsPage {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub enum HomeState {
    Loading,
    Loaded {
        featured: Vec<Event>,
        upcoming: Vec<Event>,
    },
    Failed(StoreError),
}

/// Home page rails: featured events plus the next few upcoming ones.
pub struct HomePage {
    state: HomeState,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            state: HomeState::Loading,
        }
    }

    pub async fn load(&mut self, store: &EventStore) {
        self.load_at(store, Utc::now().date_naive()).await;
    }

    pub async fn load_at(&mut self, store: &EventStore, today: chrono::NaiveDate) {
        match store.fetch_all().await {
            Ok(all) => {
                self.state = HomeState::Loaded {
                    featured: views::featured(&all),
                    upcoming: views::upcoming(&all, today),
                };
            }
            Err(err) => {
                tracing::warn!("event fetch failed: {err}");
                self.state = HomeState::Failed(err);
            }
        }
    }

    pub fn state(&self) -> &HomeState {
        &self.state
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub enum DetailState {
    Loading,
    Loaded { event: Event, related: Vec<Event> },
    // Rendered as a dedicated "not found" view, not an error banner.
    NotFound,
    Failed(StoreError),
}

pub struct EventDetailPage {
    id: String,
    state: DetailState,
}

impl EventDetailPage {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: DetailState::Loading,
        }
    }

    pub async fn load(&mut self, store: &EventStore) {
        let event = match store.fetch_by_id(&self.id).await {
            Ok(event) => event,
            Err(StoreError::NotFound(id)) => {
                tracing::debug!(%id, "event lookup missed");
                self.state = DetailState::NotFound;
                return;
            }
            Err(err) => {
                tracing::warn!("event fetch failed: {err}");
                self.state = DetailState::Failed(err);
                return;
            }
        };

        // The detail itself already loaded; a failed related lookup just
        // leaves that section empty.
        let related = match store.fetch_all().await {
            Ok(all) => views::related(&all, &event),
            Err(err) => {
                tracing::warn!("related events fetch failed: {err}");
                Vec::new()
            }
        };

        self.state = DetailState::Loaded { event, related };
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }
}

// Demo placeholder until real per-user event registrations exist.
const SAVED_IDS: [&str; 3] = ["event-1", "event-3", "event-5"];
const REGISTERED_IDS: [&str; 3] = ["event-2", "event-4", "event-6"];

#[derive(Debug)]
pub enum ProfileState {
    Loading,
    Loaded {
        upcoming: Vec<Event>,
        saved: Vec<Event>,
    },
    Failed(StoreError),
}

pub struct ProfilePage {
    state: ProfileState,
}

impl ProfilePage {
    pub fn new() -> Self {
        Self {
            state: ProfileState::Loading,
        }
    }

    pub async fn load(&mut self, store: &EventStore) {
        match store.fetch_all().await {
            Ok(all) => {
                self.state = ProfileState::Loaded {
                    upcoming: select_by_ids(&all, &REGISTERED_IDS),
                    saved: select_by_ids(&all, &SAVED_IDS),
                };
            }
            Err(err) => {
                tracing::warn!("event fetch failed: {err}");
                self.state = ProfileState::Failed(err);
            }
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }
}

impl Default for ProfilePage {
    fn default() -> Self {
        Self::new()
    }
}

fn select_by_ids(events: &[Event], ids: &[&str]) -> Vec<Event> {
    events
        .iter()
        .filter(|event| ids.contains(&event.id.as_str()))
        .cloned()
        .collect()
}

/// Login form controller: validates before calling the service and blocks
/// duplicate submission while a request is pending.
pub struct LoginForm {
    pub input: LoginInput,
    field_errors: Vec<FieldError>,
    general_error: Option<String>,
    pending: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            input: LoginInput::default(),
            field_errors: Vec::new(),
            general_error: None,
            pending: false,
        }
    }

    /// Returns true when the user ends up signed in.
    pub async fn submit(&mut self, service: &AuthService, session: &SessionStore) -> bool {
        if self.pending {
            return false;
        }
        self.general_error = None;

        if let Err(errors) = validate_login(&self.input) {
            self.field_errors = errors;
            return false;
        }
        self.field_errors.clear();

        self.pending = true;
        let result = service.login(&self.input.email, &self.input.password).await;
        self.pending = false;

        match result {
            Ok(user) => {
                session.sign_in(user);
                true
            }
            Err(err) => {
                self.general_error = Some(err.to_string());
                false
            }
        }
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SignupForm {
    pub input: SignupInput,
    field_errors: Vec<FieldError>,
    general_error: Option<String>,
    pending: bool,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            input: SignupInput::default(),
            field_errors: Vec::new(),
            general_error: None,
            pending: false,
        }
    }

    pub async fn submit(&mut self, service: &AuthService, session: &SessionStore) -> bool {
        if self.pending {
            return false;
        }
        self.general_error = None;

        if let Err(errors) = validate_signup(&self.input) {
            self.field_errors = errors;
            return false;
        }
        self.field_errors.clear();

        self.pending = true;
        let result = service
            .signup(&self.input.name, &self.input.email, &self.input.password)
            .await;
        self.pending = false;

        match result {
            Ok(user) => {
                session.sign_in(user);
                true
            }
            Err(err) => {
                self.general_error = Some(err.to_string());
                false
            }
        }
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}
