use std::{
    cell::RefCell,
    fs::{File, OpenOptions},
    io::Write,
};

use crate::{
    select::select_model::{SelectOption, UpdateOutcome},
    trace::{error::TraceError, trace::UpdateEvent},
};

/// Optional JSONL sink for updater runs, one line per run.
///
/// A logger built with [`TraceLogger::disabled`] accepts and drops every
/// record, so callers never branch on whether tracing was requested.
#[derive(Debug)]
pub struct TraceLogger {
    sink: Option<RefCell<File>>,
}

impl TraceLogger {
    /// Open `path` for appending. A path the user asked for must be usable.
    pub fn open(path: &str) -> Result<Self, TraceError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| TraceError::Open {
                path: path.to_string(),
                source,
            })?;
        Ok(Self {
            sink: Some(RefCell::new(file)),
        })
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Record the result of one update of `control`.
    pub fn record(
        &self,
        control: &str,
        region: &str,
        outcome: &UpdateOutcome,
        options: &[SelectOption],
    ) -> Result<(), TraceError> {
        let Some(sink) = &self.sink else {
            return Ok(());
        };

        let event = UpdateEvent::now(control, region, outcome.clone()).with_options(options);
        let mut line = serde_json::to_string(&event)?;
        line.push('\n');
        sink.borrow_mut().write_all(line.as_bytes())?;
        Ok(())
    }
}
