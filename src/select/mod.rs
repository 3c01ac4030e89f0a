pub mod control;
pub mod error;
pub mod form;
pub mod select_model;
pub mod updater;
