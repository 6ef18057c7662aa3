//! User interface module
//!
//! This module builds the widgets for:
//! - The date range controls (controls.rs)
//! - The "Did You Know?" panel (fact.rs)
//! - The thumbnail grid and its loading/empty/error states (gallery.rs)
//! - The detail overlay (detail.rs)
//! - Modal overlays and notices (modal.rs)

pub mod controls;
pub mod detail;
pub mod fact;
pub mod gallery;
pub mod modal;
