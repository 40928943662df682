//! Wire DTOs for the REST boundary with the Authority.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON and Mongo-style `_id`
//! keys through serde renames, so the rest of the crate works with plain
//! snake_case Rust structs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role granted by the Authority. Anything else fails to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Student => "Student",
        }
    }
}

/// Server-confirmed attributes of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Email verification flag.
    #[serde(rename = "isVerified", alias = "verified", default)]
    pub verified: bool,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Up to two uppercase initials for the avatar badge.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect();
        if initials.is_empty() { "U".to_owned() } else { initials }
    }

    /// First word of the display name, for greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("there")
    }
}

/// Response envelope shared by the check-auth, login, signup and verify endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<Identity>,
}

impl AuthEnvelope {
    /// The identity, but only when the Authority also reported success.
    pub fn trusted_identity(&self) -> Option<&Identity> {
        if self.success { self.user.as_ref() } else { None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyEmailRequest {
    pub code: String,
}

/// Lifecycle status of an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventStatus {
    #[default]
    Draft,
    Published,
    Cancelled,
    Completed,
}

impl EventStatus {
    pub const ALL: [Self; 4] = [Self::Draft, Self::Published, Self::Cancelled, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Event category as sent by the backend: populated object or bare id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Populated(Category),
    Id(String),
}

/// Display label for a category name, with friendly names for the built-in ones.
pub fn category_label(category: Option<&CategoryRef>) -> String {
    let name = match category {
        None => return "Event".to_owned(),
        Some(CategoryRef::Populated(c)) => c.name.as_str(),
        Some(CategoryRef::Id(id)) => id.as_str(),
    };
    let label = match name {
        "seminar" => "Seminar",
        "workshop" => "Workshop",
        "festival" => "Festival",
        "club" => "Club Activity",
        "training" => "Training",
        "other" => "Other",
        "" => "Event",
        other => other,
    };
    label.to_owned()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Organizer reference; populated as a user record or left as an id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrganizerRef {
    Populated {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        email: Option<String>,
    },
    Id(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub organizer: Option<OrganizerRef>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub total_seats: Option<u32>,
    #[serde(default)]
    pub available_seats: Option<u32>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub banner_image: Option<String>,
}

impl Event {
    pub fn venue(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.venue.as_deref())
    }

    pub fn organizer_name(&self) -> Option<&str> {
        match self.organizer.as_ref()? {
            OrganizerRef::Populated { name, email } => name.as_deref().or(email.as_deref()),
            OrganizerRef::Id(_) => None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.price.map_or(true, |p| p <= 0.0)
    }
}

/// Filters for `GET /events`. Empty strings are omitted from the query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventQuery {
    pub search: String,
    pub category: String,
    pub status: String,
    pub page: u32,
    pub limit: u32,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self { search: String::new(), category: String::new(), status: String::new(), page: 1, limit: 20 }
    }
}

impl EventQuery {
    /// Query-string pairs in the order the backend documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.max(1).to_string()), ("limit", self.limit.max(1).to_string())];
        for (key, value) in [("search", &self.search), ("category", &self.category), ("status", &self.status)] {
            let value = value.trim();
            if !value.is_empty() {
                pairs.push((key, value.to_owned()));
            }
        }
        pairs
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
}

impl Pagination {
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 1;
        }
        self.total.div_ceil(self.limit).max(1)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct EventList {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EventEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub event: Option<Event>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryList {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Minimal user reference embedded in a registration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registrant {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Event reference embedded in a registration: populated or bare id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventRef {
    Populated(Box<Event>),
    Id(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub event: Option<EventRef>,
    #[serde(default)]
    pub user: Option<Registrant>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Registration {
    pub fn event(&self) -> Option<&Event> {
        match self.event.as_ref()? {
            EventRef::Populated(event) => Some(event),
            EventRef::Id(_) => None,
        }
    }

    /// False once the registration has been cancelled.
    pub fn is_active(&self) -> bool {
        !self.status.as_deref().is_some_and(|s| s.eq_ignore_ascii_case("cancelled"))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RegistrationList {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub registrations: Vec<Registration>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub event_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: EventStatus,
}

/// Generic `{ success, message }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Account record in the admin user list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub users: Vec<UserRecord>,
}
