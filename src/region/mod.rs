pub mod data;
pub mod error;
pub mod lookup_table;
