//! Image link extraction.

use regex::Regex;

use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::output::print_warning;
use crate::page::Page;

/// Pattern an image URL must match to be accepted.
#[derive(Debug, Clone)]
pub struct HostPattern(Regex);

impl HostPattern {
    /// Compile a host pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self(Regex::new(pattern)?))
    }

    /// Whether the URL belongs to an accepted host.
    pub fn is_match(&self, url: &str) -> bool {
        self.0.is_match(url)
    }
}

/// Which attributes image URLs are read from.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Lazy-load attribute holding the real image URL.
    pub lazy_src_attribute: String,

    /// Read `src` when the lazy attribute is missing.
    pub fallback_to_src: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            lazy_src_attribute: "data-src".to_string(),
            fallback_to_src: false,
        }
    }
}

impl From<&ScrapeConfig> for ExtractOptions {
    fn from(config: &ScrapeConfig) -> Self {
        Self {
            lazy_src_attribute: config.lazy_src_attribute.clone(),
            fallback_to_src: config.fallback_to_src,
        }
    }
}

/// Collects candidate image URLs from a page.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    pattern: HostPattern,
    options: ExtractOptions,
}

impl LinkExtractor {
    pub fn new(pattern: HostPattern, options: ExtractOptions) -> Self {
        Self { pattern, options }
    }

    /// Image URLs matching the host pattern, in document order.
    ///
    /// Duplicates are kept. An `img` without a usable source attribute is
    /// reported and skipped.
    pub fn extract(&self, page: &Page) -> Vec<String> {
        let mut urls = Vec::new();

        for (position, image) in page.images().enumerate() {
            let element = image.value();

            let url = match element.attr(&self.options.lazy_src_attribute) {
                Some(url) => url,
                None => {
                    print_warning(&format!(
                        "Image #{} has no {} attribute",
                        position + 1,
                        self.options.lazy_src_attribute
                    ));
                    match element.attr("src").filter(|_| self.options.fallback_to_src) {
                        Some(src) => src,
                        None => continue,
                    }
                }
            };

            if !self.pattern.is_match(url) {
                tracing::debug!("Skipping image from unmatched host: {}", url);
                continue;
            }

            urls.push(url.to_string());
        }

        tracing::debug!("Found {} matching image URLs", urls.len());
        urls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GALLERY: &str = r#"
        <html><body>
          <h1>(NSFW) My Gallery</h1>
          <img data-src="https://img.example.com/1.jpg" src="placeholder.gif">
          <img data-src="https://ads.example.net/banner.jpg">
          <img src="https://img.example.com/plain.jpg">
          <img data-src="https://img.example.com/2.jpg">
          <img data-src="https://img.example.com/1.jpg">
        </body></html>
    "#;

    fn extractor(options: ExtractOptions) -> LinkExtractor {
        LinkExtractor::new(
            HostPattern::new(r"^https://img\.example\.com/").unwrap(),
            options,
        )
    }

    #[test]
    fn test_extract_matching_in_order() {
        let page = Page::parse(GALLERY);
        let urls = extractor(ExtractOptions::default()).extract(&page);
        assert_eq!(
            urls,
            vec![
                "https://img.example.com/1.jpg",
                "https://img.example.com/2.jpg",
                "https://img.example.com/1.jpg",
            ]
        );
    }

    #[test]
    fn test_extract_with_src_fallback() {
        let page = Page::parse(GALLERY);
        let options = ExtractOptions {
            fallback_to_src: true,
            ..ExtractOptions::default()
        };
        let urls = extractor(options).extract(&page);
        assert_eq!(urls.len(), 4);
        assert_eq!(urls[1], "https://img.example.com/plain.jpg");
    }

    #[test]
    fn test_extract_no_images() {
        let page = Page::parse("<html><body><h1>Empty</h1></body></html>");
        assert!(extractor(ExtractOptions::default()).extract(&page).is_empty());
    }

    #[test]
    fn test_custom_lazy_attribute() {
        let page = Page::parse(r#"<img data-original="https://img.example.com/x.jpg">"#);
        let options = ExtractOptions {
            lazy_src_attribute: "data-original".to_string(),
            fallback_to_src: false,
        };
        assert_eq!(
            extractor(options).extract(&page),
            vec!["https://img.example.com/x.jpg"]
        );
    }

    #[test]
    fn test_invalid_host_pattern() {
        assert!(HostPattern::new("[").is_err());
    }
}
