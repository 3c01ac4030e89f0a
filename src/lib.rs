pub mod cli;
pub mod region;
pub mod report;
pub mod select;
pub mod trace;

pub use region::lookup_table::RegionLookupTable;
pub use select::{
    control::{MemorySelect, SelectControl},
    select_model::{SelectOption, UpdateOutcome},
    updater::{DependentSelectUpdater, update_dependent_select},
};
