#![allow(dead_code)]

use lga_select::{MemorySelect, RegionLookupTable, SelectOption, UpdateOutcome, update_dependent_select};

/// Select `region` and run the updater against a fresh dependent control.
pub fn select_region(region: &str, table: &RegionLookupTable) -> (UpdateOutcome, MemorySelect) {
    let mut state = MemorySelect::new("state");
    state.select(region);
    let mut lga = MemorySelect::new("lga");
    let outcome = update_dependent_select(&state, &mut lga, table);
    (outcome, lga)
}

pub fn labels(options: &[SelectOption]) -> Vec<String> {
    options.iter().map(|o| o.label.clone()).collect()
}

/// Scratch file under the system temp dir, unique per test name.
pub fn temp_path(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("lga_select_tests");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(format!("{}_{}", std::process::id(), name))
}
