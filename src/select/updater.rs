use tracing::{debug, trace};

use crate::{
    region::lookup_table::RegionLookupTable,
    select::{
        control::SelectControl,
        select_model::{DEFAULT_PLACEHOLDER_LABEL, SelectOption, UpdateOutcome},
    },
};

/// Keeps a dependent select in sync with the region select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentSelectUpdater {
    placeholder: SelectOption,
}

impl Default for DependentSelectUpdater {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_LABEL)
    }
}

impl DependentSelectUpdater {
    pub fn new(placeholder_label: impl Into<String>) -> Self {
        Self {
            placeholder: SelectOption::placeholder(placeholder_label),
        }
    }

    pub fn placeholder(&self) -> &SelectOption {
        &self.placeholder
    }

    /// Rebuild `dependent` from the value currently selected in `region`.
    ///
    /// The dependent list always ends up as the placeholder followed by the
    /// region's subdivisions in table order. Prior options are discarded, so
    /// repeated calls with the same selection produce the same list. An
    /// unknown or empty selection leaves only the placeholder.
    pub fn update<R, D>(
        &self,
        region: &R,
        dependent: &mut D,
        table: &RegionLookupTable,
    ) -> UpdateOutcome
    where
        R: SelectControl + ?Sized,
        D: SelectControl + ?Sized,
    {
        let selected = region.selected_value();

        dependent.clear_options();
        dependent.append_option(&self.placeholder.value, &self.placeholder.label);

        if selected.is_empty() {
            trace!("no region selected");
            return UpdateOutcome::NoSelection;
        }

        match table.lookup(&selected) {
            Some(subdivisions) => {
                for name in subdivisions {
                    dependent.append_option(name, name);
                }
                trace!(region = %selected, count = subdivisions.len(), "dependent select populated");
                UpdateOutcome::Populated {
                    region: selected,
                    count: subdivisions.len(),
                }
            }
            None => {
                debug!(region = %selected, "region has no lookup table entry");
                UpdateOutcome::UnknownRegion { region: selected }
            }
        }
    }
}

/// Run the updater with the default "Select LGA" placeholder.
pub fn update_dependent_select<R, D>(
    region: &R,
    dependent: &mut D,
    table: &RegionLookupTable,
) -> UpdateOutcome
where
    R: SelectControl + ?Sized,
    D: SelectControl + ?Sized,
{
    DependentSelectUpdater::default().update(region, dependent, table)
}
