//! Core use-case services.
//!
//! # Responsibility
//! - Drive layout and theme state on behalf of the UI layer.
//! - Keep UI hosts decoupled from storage details.

pub mod layout_engine;
pub mod notify;
pub mod session;
pub mod theme_service;
