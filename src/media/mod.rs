//! Media module for image link extraction and naming.

pub mod item;
pub mod parser;

pub use item::{image_file_name, png_fallback_url, ImageExt};
pub use parser::{ExtractOptions, HostPattern, LinkExtractor};
