use crate::model::LocationQuery;

/// Text field backing a search: edited freely, read on activation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    text: String,
}

impl QueryInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole text, as a paste or a line editor would.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The query to send, verbatim. Empty and whitespace-only text is not
    /// filtered out.
    pub fn activate(&self) -> LocationQuery {
        LocationQuery::new(self.text.clone())
    }
}
