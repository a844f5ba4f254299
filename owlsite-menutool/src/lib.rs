//! Owl Site data maintenance: kitchen menu import and pack validation.

pub mod import;
pub mod kitchen;
pub mod merge;
pub mod validate;
