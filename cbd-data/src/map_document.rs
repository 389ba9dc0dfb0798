/// The prebuilt trip-flow map: a standalone HTML document.
///
/// Its structure is never inspected; it is embedded exactly as read.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct MapDocument {
    html: String,
}

impl MapDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}
