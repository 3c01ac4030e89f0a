use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    report::fingerprint::options_fingerprint,
    select::select_model::{SelectOption, UpdateOutcome},
};

/// One updater run, as written to the JSONL trace file.
#[derive(Debug, Serialize)]
pub struct UpdateEvent {
    pub timestamp_ms: u128,
    pub control: String,
    pub region: String,
    pub outcome: UpdateOutcome,
    pub option_count: usize,
    pub fingerprint: Option<String>,
}

impl UpdateEvent {
    pub fn now(control: &str, region: &str, outcome: UpdateOutcome) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            control: control.to_string(),
            region: region.to_string(),
            outcome,
            option_count: 0,
            fingerprint: None,
        }
    }

    pub fn with_options(mut self, options: &[SelectOption]) -> Self {
        self.option_count = options.len();
        self.fingerprint = Some(options_fingerprint(options));
        self
    }
}
