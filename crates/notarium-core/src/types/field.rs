//! Date input field value object.

use serde::{Deserialize, Serialize};

use super::Date;

/// The state of one date input field.
///
/// A field holds at most one canonical [`Date`] and derives both textual
/// forms from it on demand, so the display string and the ISO string can
/// never drift apart. The UI layer owns one `DateField` per on-screen date
/// input and routes every mutation through the setters here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateField {
    value: Option<Date>,
}

impl DateField {
    /// Creates an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field holding the given date.
    #[must_use]
    pub fn with_date(date: Date) -> Self {
        Self { value: Some(date) }
    }

    /// Sets the field from user-typed `DD/MM/YYYY` text.
    ///
    /// Incomplete or impossible input clears the field; a cleared field
    /// suppresses downstream computation rather than signalling an error.
    pub fn set_from_display_text(&mut self, text: &str) {
        self.value = Date::parse_display(text);
    }

    /// Sets the field from canonical ISO `YYYY-MM-DD` text.
    pub fn set_from_iso(&mut self, text: &str) {
        self.value = Date::parse(text).ok();
    }

    /// Sets the field to today's date (the "today" shortcut button).
    pub fn set_to_today(&mut self) {
        self.value = Some(Date::today());
    }

    /// Clears the field.
    pub fn clear(&mut self) {
        self.value = None;
    }

    /// The canonical date, if the field holds one.
    #[must_use]
    pub fn date(&self) -> Option<Date> {
        self.value
    }

    /// Returns true if the field holds no date.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// The `DD/MM/YYYY` display text, or an empty string when unset.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.value.map(|d| d.format_display()).unwrap_or_default()
    }

    /// The ISO `YYYY-MM-DD` text, or an empty string when unset.
    #[must_use]
    pub fn iso_text(&self) -> String {
        self.value.map(|d| d.to_string()).unwrap_or_default()
    }
}
