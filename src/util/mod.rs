//! Utility helpers shared across views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from page and component logic.

pub mod banner;
pub mod format;
pub mod storage;
pub mod task;
