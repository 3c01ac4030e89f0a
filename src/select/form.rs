use tracing::error;

use crate::{
    region::lookup_table::RegionLookupTable,
    select::{
        control::{MemorySelect, SelectControl},
        error::FormError,
        select_model::{SelectOption, UpdateOutcome},
        updater::DependentSelectUpdater,
    },
};

pub const REGION_CONTROL_ID: &str = "state";
pub const SUBDIVISION_CONTROL_ID: &str = "lga";
pub const REGION_PLACEHOLDER_LABEL: &str = "Select State";

/// A page's select controls plus the handler wired to the region select.
#[derive(Debug, Clone, Default)]
pub struct SelectForm {
    controls: Vec<MemorySelect>,
    updater: DependentSelectUpdater,
}

impl SelectForm {
    pub fn new(updater: DependentSelectUpdater) -> Self {
        Self {
            controls: Vec::new(),
            updater,
        }
    }

    /// The employee page: a `state` select listing every region and an
    /// `lga` select holding only its placeholder.
    pub fn employee_form(table: &RegionLookupTable, placeholder_label: &str) -> Self {
        let mut region_options = vec![SelectOption::placeholder(REGION_PLACEHOLDER_LABEL)];
        region_options.extend(table.regions().map(SelectOption::labelled));

        let updater = DependentSelectUpdater::new(placeholder_label);
        let lga = MemorySelect::new(SUBDIVISION_CONTROL_ID)
            .with_options(vec![updater.placeholder().clone()]);

        Self::new(updater)
            .with_control(MemorySelect::new(REGION_CONTROL_ID).with_options(region_options))
            .with_control(lga)
    }

    /// Add a control, replacing any existing control with the same id.
    pub fn with_control(mut self, control: MemorySelect) -> Self {
        match self.position(&control.id) {
            Some(i) => self.controls[i] = control,
            None => self.controls.push(control),
        }
        self
    }

    pub fn control(&self, id: &str) -> Option<&MemorySelect> {
        self.controls.iter().find(|c| c.id == id)
    }

    pub fn options(&self, id: &str) -> Result<Vec<SelectOption>, FormError> {
        self.control(id)
            .map(|c| c.options())
            .ok_or_else(|| missing(id))
    }

    /// Control ids in insertion order.
    pub fn control_ids(&self) -> impl Iterator<Item = &str> {
        self.controls.iter().map(|c| c.id.as_str())
    }

    /// Change handler for the region select: record the new value, then
    /// rebuild the dependent select.
    pub fn on_region_change(
        &mut self,
        value: &str,
        table: &RegionLookupTable,
    ) -> Result<UpdateOutcome, FormError> {
        let (region, _) = pair_mut(&mut self.controls)?;
        region.select(value);
        self.refresh(table)
    }

    /// Rebuild the dependent select from the region select's current value.
    pub fn refresh(&mut self, table: &RegionLookupTable) -> Result<UpdateOutcome, FormError> {
        let (region, dependent) = pair_mut(&mut self.controls)?;
        Ok(self.updater.update(&*region, dependent, table))
    }

    fn position(&self, id: &str) -> Option<usize> {
        position(&self.controls, id)
    }
}

fn position(controls: &[MemorySelect], id: &str) -> Option<usize> {
    controls.iter().position(|c| c.id == id)
}

/// Borrow the region and dependent controls together.
fn pair_mut(
    controls: &mut [MemorySelect],
) -> Result<(&mut MemorySelect, &mut MemorySelect), FormError> {
    let r = position(controls, REGION_CONTROL_ID).ok_or_else(|| missing(REGION_CONTROL_ID))?;
    let d = position(controls, SUBDIVISION_CONTROL_ID)
        .ok_or_else(|| missing(SUBDIVISION_CONTROL_ID))?;

    // ids are unique, so r != d
    if r < d {
        let (head, tail) = controls.split_at_mut(d);
        Ok((&mut head[r], &mut tail[0]))
    } else {
        let (head, tail) = controls.split_at_mut(r);
        Ok((&mut tail[0], &mut head[d]))
    }
}

fn missing(id: &str) -> FormError {
    error!(id, "form control missing");
    FormError::MissingControl { id: id.to_string() }
}
