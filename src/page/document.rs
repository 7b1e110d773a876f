//! Parsed HTML document.

use scraper::{ElementRef, Html, Selector};

/// A parsed page.
///
/// Holds the document tree only while links and the title are read from it.
pub struct Page {
    html: Html,
}

impl Page {
    /// Parse an HTML document.
    pub fn parse(body: &str) -> Self {
        let html = Html::parse_document(body);
        if !html.errors.is_empty() {
            tracing::debug!("HTML parser recovered from {} errors", html.errors.len());
        }
        Self { html }
    }

    /// Text of the first `h1` element, or an empty string if there is none.
    pub fn heading_text(&self) -> String {
        self.select_all("h1")
            .next()
            .map(|h1| h1.text().collect::<String>())
            .unwrap_or_default()
    }

    /// All `img` elements in document order.
    pub fn images(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.select_all("img")
    }

    fn select_all(&self, selector: &'static str) -> impl Iterator<Item = ElementRef<'_>> {
        // Static selectors always parse.
        let selector = Selector::parse(selector).ok();
        let elements: Vec<ElementRef<'_>> = match selector {
            Some(selector) => self.html.select(&selector).collect(),
            None => Vec::new(),
        };
        elements.into_iter()
    }
}
