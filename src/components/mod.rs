//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components read the session through context and never write to it;
//! the only mutations go through `SessionStore` operations.

pub mod event_card;
pub mod layout;
pub mod loading;
pub mod route_gate;
pub mod user_menu;
pub mod verification_banner;
