//! State management module
//!
//! This module handles all application state, including:
//! - Shared data structures (data.rs)
//! - Date range filtering (filter.rs)
//! - The per-run feed cache and current selection (session.rs)

pub mod data;
pub mod filter;
pub mod session;
