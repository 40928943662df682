//! Routing model: paths, access declarations, the guard and landing policy.
//!
//! ARCHITECTURE
//! ============
//! `table` declares who may open each route, `guard` turns a session
//! snapshot plus a declaration into a decision, and `landing` owns every
//! role-dependent redirect target. All three are pure and browser-free.

pub mod guard;
pub mod landing;
pub mod paths;
pub mod table;
