use crate::select::select_model::{SelectOption, UpdateOutcome};

// ============================================================================
// Console renderer — formatted terminal output
// ============================================================================

/// Format an option list for terminal output.
///
/// Produces output like:
/// ```text
/// === lga: Lagos (4 options) ===
///   [placeholder] Select LGA
///   Ikeja
///   Surulere
/// ```
pub fn format_console_options(
    control_id: &str,
    outcome: &UpdateOutcome,
    options: &[SelectOption],
) -> String {
    let mut out = String::new();

    let heading = match outcome {
        UpdateOutcome::Populated { region, count } => format!("{} ({} options)", region, count),
        UpdateOutcome::NoSelection => "no state selected".to_string(),
        UpdateOutcome::UnknownRegion { region } => format!("{} (unknown state)", region),
    };
    out.push_str(&format!("=== {}: {} ===\n", control_id, heading));

    for option in options {
        if option.is_placeholder() {
            out.push_str(&format!("  [placeholder] {}\n", option.label));
        } else {
            out.push_str(&format!("  {}\n", option.label));
        }
    }

    out
}

/// One region name per line.
pub fn format_region_list<'a>(regions: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for region in regions {
        out.push_str(region);
        out.push('\n');
    }
    out
}
