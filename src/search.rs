/// Search bar state for the product list. The host stores one of
/// these and re-filters its rows on every edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSearch {
    text: String,
}

impl ProductSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Case-insensitive substring match on the product name. An empty
    /// search matches everything.
    pub fn matches(&self, product_name: &str) -> bool {
        product_name
            .to_lowercase()
            .contains(&self.text.to_lowercase())
    }
}
