use serde::Serialize;

pub const DEFAULT_PLACEHOLDER_LABEL: &str = "Select LGA";

/// One `<option>` of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The "no selection" entry: empty value, visible label.
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new("", label)
    }

    /// An option whose value and visible text are the same string.
    pub fn labelled(name: &str) -> Self {
        Self::new(name, name)
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// What a single updater run did to the dependent control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UpdateOutcome {
    /// Region found; `count` subdivision options follow the placeholder.
    Populated { region: String, count: usize },
    /// Region control has no value.
    NoSelection,
    /// Region value has no table entry.
    UnknownRegion { region: String },
}

impl UpdateOutcome {
    /// Number of non-placeholder options now in the dependent control.
    pub fn subdivision_count(&self) -> usize {
        match self {
            UpdateOutcome::Populated { count, .. } => *count,
            _ => 0,
        }
    }
}
