//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form state,
//! post-submit navigation) and delegates rendering details to `components`.
//! Access control never happens here; the route gate has already decided.

pub mod admin_dashboard;
pub mod admin_registrations;
pub mod admin_users;
pub mod event_detail;
pub mod events;
pub mod home;
pub mod login;
pub mod my_bookings;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod student_dashboard;
pub mod verify_email;
