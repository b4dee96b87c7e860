//! Domain model for the bento dashboard.
//!
//! # Responsibility
//! - Define tile descriptors and the ordered layout that renders them.
//! - Keep layout mutations order-only so identity never changes.
//!
//! # Invariants
//! - Every tile is identified by a stable, non-blank `ItemId`.
//! - A layout never gains, loses or duplicates an id.

pub mod grid_item;
pub mod layout;
pub mod theme;
