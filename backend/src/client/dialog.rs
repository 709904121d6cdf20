//! Add-insight dialog state machine.
//!
//! The dialog owns its form values so a failed submission can be retried
//! without retyping. Values reset only when a submission completes or the
//! user cancels.

use super::brands::default_brand_id;

/// Lifecycle states of the add-insight dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// Dialog hidden; form values are at their defaults.
    Closed,
    /// Dialog visible and accepting input.
    Open,
    /// The last submission failed; form values are kept for retry.
    SubmitFailed,
}

/// Form state backing the add-insight dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddInsightDialog {
    state: DialogState,
    brand: i64,
    text: String,
}

impl Default for AddInsightDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl AddInsightDialog {
    /// Create a closed dialog with default form values.
    pub fn new() -> Self {
        Self {
            state: DialogState::Closed,
            brand: default_brand_id(),
            text: String::new(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Whether the dialog should be rendered.
    pub fn is_open(&self) -> bool {
        self.state != DialogState::Closed
    }

    /// Currently selected brand id.
    pub fn brand(&self) -> i64 {
        self.brand
    }

    /// Currently entered text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Show the dialog.
    pub fn open(&mut self) {
        self.state = DialogState::Open;
    }

    /// Hide the dialog, discarding any entered values.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Update the selected brand.
    pub fn set_brand(&mut self, brand: i64) {
        self.brand = brand;
    }

    /// Update the entered text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Close the dialog and reset form values after a confirmed submission.
    pub(crate) fn complete_submission(&mut self) {
        self.reset();
    }

    /// Keep form values but flag the failure so the page can surface it.
    pub(crate) fn fail_submission(&mut self) {
        self.state = DialogState::SubmitFailed;
    }

    fn reset(&mut self) {
        self.state = DialogState::Closed;
        self.brand = default_brand_id();
        self.text.clear();
    }
}
