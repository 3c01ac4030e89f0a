use thiserror::Error;

/// Wiring defects between the form and the updater.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// A control the updater depends on is not part of the form
    #[error("Form has no control with id '{id}'")]
    MissingControl { id: String },
}
