//! Route path constants shared by the router, the guard and redirects.

pub const HOME: &str = "/";
pub const EVENTS: &str = "/events";
pub const EVENT_DETAIL: &str = "/events/:id";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const VERIFY_EMAIL: &str = "/verify-email";
pub const NOT_FOUND: &str = "/404";

pub const STUDENT_DASHBOARD: &str = "/student/dashboard";
pub const STUDENT_PROFILE: &str = "/student/profile";
pub const STUDENT_MY_BOOKINGS: &str = "/student/my-bookings";

pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
pub const ADMIN_USERS: &str = "/admin/users";
pub const ADMIN_EVENT_REGISTRATIONS: &str = "/admin/events/:id/registrations";

/// Concrete path for one event's detail view.
pub fn event_detail(id: &str) -> String {
    format!("{EVENTS}/{}", urlencoding::encode(id))
}

/// Concrete path for one event's registrant list.
pub fn admin_event_registrations(id: &str) -> String {
    format!("/admin/events/{}/registrations", urlencoding::encode(id))
}
