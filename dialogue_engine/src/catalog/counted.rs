//! Counted entries - a dialogue line and how often it has been shown.

/// A line of dialogue with its usage counter.
///
/// The counter starts at zero and only ever grows, by one per selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CountedEntry {
    occurrences: u64,
    text: String,
}

impl CountedEntry {
    pub(crate) fn new(text: String) -> Self {
        Self {
            occurrences: 0,
            text,
        }
    }

    pub(crate) fn occurrences(&self) -> u64 {
        self.occurrences
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// Count one more showing of this line.
    pub(crate) fn record_use(&mut self) {
        self.occurrences += 1;
    }
}
