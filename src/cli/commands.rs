use std::borrow::Cow;

use tracing::info;

use crate::cli::config::Settings;
use crate::region::{error::TableError, lookup_table::RegionLookupTable};
use crate::report::console::{format_console_options, format_region_list};
use crate::report::html::{render_form_html, render_options_html};
use crate::select::form::{REGION_CONTROL_ID, SUBDIVISION_CONTROL_ID, SelectForm};
use crate::select::select_model::UpdateOutcome;
use crate::trace::error::TraceError;
use crate::trace::logger::TraceLogger;

// ============================================================================
// Shared setup
// ============================================================================

/// The table named in settings, or the builtin one.
pub fn load_table(path: Option<&str>) -> Result<Cow<'static, RegionLookupTable>, TableError> {
    match path {
        Some(path) => Ok(Cow::Owned(RegionLookupTable::load(path)?)),
        None => Ok(Cow::Borrowed(RegionLookupTable::builtin())),
    }
}

/// Trace sink for `settings.trace`; an unusable path fails the command.
pub fn build_tracer(settings: &Settings) -> Result<TraceLogger, TraceError> {
    match settings.trace.as_deref() {
        Some(path) => TraceLogger::open(path),
        None => Ok(TraceLogger::disabled()),
    }
}

// ============================================================================
// regions subcommand
// ============================================================================

pub fn cmd_regions(table: &RegionLookupTable) -> String {
    format_region_list(table.regions())
}

// ============================================================================
// lgas subcommand
// ============================================================================

/// Select `state` on the employee form and format the resulting LGA list.
pub fn cmd_lgas(
    table: &RegionLookupTable,
    settings: &Settings,
    state: &str,
    tracer: &TraceLogger,
) -> Result<(UpdateOutcome, String), Box<dyn std::error::Error>> {
    let mut form = SelectForm::employee_form(table, &settings.placeholder_label);
    let outcome = form.on_region_change(state, table)?;
    let options = form.options(SUBDIVISION_CONTROL_ID)?;

    tracer.record(SUBDIVISION_CONTROL_ID, state, &outcome, &options)?;
    info!(state, options = options.len(), "lga options built");

    let content = match settings.format.as_str() {
        "json" => {
            let mut json = serde_json::to_string_pretty(&options)?;
            json.push('\n');
            json
        }
        "html" => render_options_html(&options),
        _ => format_console_options(SUBDIVISION_CONTROL_ID, &outcome, &options),
    };

    Ok((outcome, content))
}

// ============================================================================
// render subcommand
// ============================================================================

/// Render the state/LGA form, with the LGA list initialised for `state`.
pub fn cmd_render(
    table: &RegionLookupTable,
    settings: &Settings,
    state: Option<&str>,
    tracer: &TraceLogger,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut form = SelectForm::employee_form(table, &settings.placeholder_label);
    let selected = state.unwrap_or("");
    let outcome = form.on_region_change(selected, table)?;

    let region_options = form.options(REGION_CONTROL_ID)?;
    let lga_options = form.options(SUBDIVISION_CONTROL_ID)?;
    tracer.record(SUBDIVISION_CONTROL_ID, selected, &outcome, &lga_options)?;

    Ok(render_form_html(
        REGION_CONTROL_ID,
        &region_options,
        selected,
        SUBDIVISION_CONTROL_ID,
        &lga_options,
    ))
}

// ============================================================================
// Helpers
// ============================================================================

/// Write to `output` if given, otherwise print to stdout.
pub fn write_output(output: Option<&str>, content: &str) -> std::io::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            info!(path, "wrote output");
            Ok(())
        }
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
