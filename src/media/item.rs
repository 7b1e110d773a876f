//! Downloaded image naming.

use std::fmt;

/// Extension an image is saved under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageExt {
    Jpg,
    Png,
}

impl ImageExt {
    /// Extension without the dot.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageExt::Jpg => "jpg",
            ImageExt::Png => "png",
        }
    }
}

impl fmt::Display for ImageExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// File name for the image at a 1-based staging index, e.g. `3.jpg`.
pub fn image_file_name(index: usize, ext: ImageExt) -> String {
    format!("{}.{}", index, ext)
}

/// Rewrite a trailing `.jpg` into `.png`.
///
/// URLs without that suffix are returned unchanged.
pub fn png_fallback_url(url: &str) -> String {
    match url.strip_suffix(".jpg") {
        Some(stem) => format!("{}.png", stem),
        None => url.to_string(),
    }
}
