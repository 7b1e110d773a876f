//! Page module.
//!
//! This module provides:
//! - HTTP client for fetching the target page
//! - Parsed document access (headings and image elements)

pub mod client;
pub mod document;

pub use client::PageFetcher;
pub use document::Page;
