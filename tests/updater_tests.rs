mod common;

use common::{labels, select_region};
use lga_select::{
    DependentSelectUpdater, MemorySelect, RegionLookupTable, SelectControl, SelectOption,
    UpdateOutcome, update_dependent_select,
};

// =========================================================================
// Concrete selections
// =========================================================================

#[test]
fn lagos_lists_its_lgas_after_placeholder() {
    let (outcome, lga) = select_region("Lagos", RegionLookupTable::builtin());
    assert_eq!(
        labels(&lga.options()),
        vec!["Select LGA", "Ikeja", "Surulere", "Epe", "Eti-Osa"]
    );
    assert_eq!(
        outcome,
        UpdateOutcome::Populated {
            region: "Lagos".into(),
            count: 4
        }
    );

    // value and text are the same label
    for option in &lga.options()[1..] {
        assert_eq!(option.value, option.label);
    }
}

#[test]
fn fct_lists_six_lgas() {
    let (_, lga) = select_region("FCT", RegionLookupTable::builtin());
    let options = lga.options();
    assert_eq!(options.len(), 7, "placeholder plus six LGAs");
    assert_eq!(options[0], SelectOption::placeholder("Select LGA"));
    assert_eq!(
        options[1..].to_vec(),
        ["Abaji", "AMAC", "Bwari", "Gwagwalada", "Kuje", "Kwali"]
            .iter()
            .map(|name| SelectOption::labelled(name))
            .collect::<Vec<_>>()
    );
}

#[test]
fn empty_selection_leaves_only_placeholder() {
    let (outcome, lga) = select_region("", RegionLookupTable::builtin());
    assert_eq!(labels(&lga.options()), vec!["Select LGA"]);
    assert_eq!(outcome, UpdateOutcome::NoSelection);
    assert_eq!(outcome.subdivision_count(), 0);
}

#[test]
fn unknown_region_leaves_only_placeholder() {
    let (outcome, lga) = select_region("Atlantis", RegionLookupTable::builtin());
    assert_eq!(labels(&lga.options()), vec!["Select LGA"]);
    assert_eq!(
        outcome,
        UpdateOutcome::UnknownRegion {
            region: "Atlantis".into()
        }
    );
}

#[test]
fn lookup_is_case_sensitive() {
    for value in ["lagos", "LAGOS", " Lagos", "Lagos "] {
        let (_, lga) = select_region(value, RegionLookupTable::builtin());
        assert_eq!(lga.options().len(), 1, "'{}' must not match Lagos", value);
    }
}

// =========================================================================
// Properties over the whole table
// =========================================================================

#[test]
fn every_region_matches_table_order() {
    let table = RegionLookupTable::builtin();
    for region in table.entries() {
        let (outcome, lga) = select_region(&region.name, table);
        let options = lga.options();

        assert!(options[0].is_placeholder(), "{}: first option is placeholder", region.name);
        let listed: Vec<String> = options[1..].iter().map(|o| o.value.clone()).collect();
        assert_eq!(listed, region.subdivisions, "{}: LGAs in table order", region.name);
        assert_eq!(outcome.subdivision_count(), region.subdivisions.len());
    }
}

#[test]
fn repeated_update_does_not_accumulate() {
    let table = RegionLookupTable::builtin();
    let mut state = MemorySelect::new("state");
    state.select("Niger");
    let mut lga = MemorySelect::new("lga");

    update_dependent_select(&state, &mut lga, table);
    let first = lga.options();
    update_dependent_select(&state, &mut lga, table);
    let second = lga.options();

    assert_eq!(first, second);
    assert_eq!(second.len(), 5);
}

#[test]
fn switching_back_restores_original_list() {
    let table = RegionLookupTable::builtin();
    let mut state = MemorySelect::new("state");
    let mut lga = MemorySelect::new("lga");

    state.select("Rivers");
    update_dependent_select(&state, &mut lga, table);
    let rivers = lga.options();

    state.select("Kaduna");
    update_dependent_select(&state, &mut lga, table);
    assert_eq!(labels(&lga.options())[1], "Kaduna North");

    state.select("Rivers");
    update_dependent_select(&state, &mut lga, table);
    assert_eq!(lga.options(), rivers);
}

#[test]
fn stale_options_are_discarded() {
    let table = RegionLookupTable::builtin();
    let mut state = MemorySelect::new("state");
    state.select("Atlantis");
    let mut lga = MemorySelect::new("lga").with_options(vec![
        SelectOption::labelled("Left over"),
        SelectOption::labelled("Another"),
    ]);

    update_dependent_select(&state, &mut lga, table);
    assert_eq!(labels(&lga.options()), vec!["Select LGA"]);
}

// =========================================================================
// Updater configuration and trait objects
// =========================================================================

#[test]
fn works_through_trait_objects() {
    let table = RegionLookupTable::builtin();
    let mut state = MemorySelect::new("state");
    state.select("Oyo");
    let mut lga = MemorySelect::new("lga");

    let region: &dyn SelectControl = &state;
    let dependent: &mut dyn SelectControl = &mut lga;
    DependentSelectUpdater::default().update(region, dependent, table);

    assert_eq!(
        labels(&lga.options()),
        vec!["Select LGA", "Ibadan North", "Ogbomosho North", "Oyo East"]
    );
}

#[test]
fn custom_table_is_used_instead_of_builtin() {
    let table = RegionLookupTable::from_entries([(
        "Atlantis",
        vec!["North Gate".to_string(), "Harbour".to_string()],
    )])
    .unwrap();

    let (_, lga) = select_region("Atlantis", &table);
    assert_eq!(labels(&lga.options()), vec!["Select LGA", "North Gate", "Harbour"]);

    let (_, lga) = select_region("Lagos", &table);
    assert_eq!(lga.options().len(), 1, "builtin entries are not consulted");
}
