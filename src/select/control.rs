use crate::select::select_model::SelectOption;

/// The capabilities the updater needs from a single-selection control.
///
/// A browser binding would forward these to the DOM; [`MemorySelect`] keeps
/// everything in memory.
pub trait SelectControl {
    /// Current value, or an empty string when nothing is selected.
    fn selected_value(&self) -> String;

    fn clear_options(&mut self);

    fn append_option(&mut self, value: &str, label: &str);

    /// Snapshot of the current option list.
    fn options(&self) -> Vec<SelectOption>;
}

/// In-memory select control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySelect {
    pub id: String,
    value: String,
    options: Vec<SelectOption>,
}

impl MemorySelect {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the selected value, like a user picking an entry.
    ///
    /// The value is taken as-is even if no option carries it, mirroring a
    /// form control driven programmatically.
    pub fn select(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl SelectControl for MemorySelect {
    fn selected_value(&self) -> String {
        self.value.clone()
    }

    // Dropping every option drops the selection with it.
    fn clear_options(&mut self) {
        self.options.clear();
        self.value.clear();
    }

    fn append_option(&mut self, value: &str, label: &str) {
        self.options.push(SelectOption::new(value, label));
    }

    fn options(&self) -> Vec<SelectOption> {
        self.options.clone()
    }
}
