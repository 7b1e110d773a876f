//! Filesystem module.
//!
//! Provides:
//! - Directory naming from page titles
//! - Output directory creation with fallback
//! - The transient staged URL list

pub mod naming;
pub mod paths;
pub mod staging;

pub use naming::{is_usable_dir_name, sanitize_title, strip_tag_prefix};
pub use paths::{get_page_folder, prepare_target_dir};
pub use staging::{StagingFile, STAGING_FILE_NAME};
