//! Download module for image downloading.
//!
//! This module provides:
//! - Download state tracking
//! - Single image downloads with `.png` fallback
//! - Downloading every URL of the staged list

pub mod image;
pub mod list;
pub mod state;

pub use image::{Downloader, PROGRESS_THRESHOLD};
pub use list::download_list;
pub use state::{DownloadState, LineOutcome};
