//! Remote feed access
//!
//! This module handles:
//! - Fetching and parsing the feed document
//! - Downloading thumbnails and full-size previews
//! - Caching decoded images for the session
//! - Recognizing embeddable video links

pub mod cache;
pub mod loader;
pub mod preview;
pub mod thumbnail;
pub mod video;
