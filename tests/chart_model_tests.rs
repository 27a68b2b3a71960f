use namesurfer::api::ChartModel;
use namesurfer::core::{NDECADES, NameEntry, Rank};

fn entry(name: &str, first_rank: i32) -> NameEntry {
    let mut ranks = [0; NDECADES];
    ranks[0] = first_rank;
    NameEntry::new(name, ranks).expect("valid entry")
}

#[test]
fn entries_keep_insertion_order() {
    let mut model = ChartModel::new();
    assert!(model.is_empty());

    assert!(!model.add_entry(entry("Sam", 1)));
    assert!(!model.add_entry(entry("Eric", 2)));
    assert!(!model.add_entry(entry("Mary", 3)));

    let names: Vec<&str> = model.names().collect();
    assert_eq!(names, ["Sam", "Eric", "Mary"]);
    assert_eq!(model.len(), 3);
}

#[test]
fn re_adding_a_name_replaces_in_its_original_slot() {
    let mut model = ChartModel::new();
    model.add_entry(entry("Sam", 1));
    model.add_entry(entry("Eric", 2));
    model.add_entry(entry("Mary", 3));

    assert!(model.add_entry(entry("Sam", 99)));
    assert_eq!(model.len(), 3);

    let first = model.entries().next().expect("first entry");
    assert_eq!(first.name(), "Sam");
    assert_eq!(first.rank(0), Some(Rank::Ranked(99)));
}

#[test]
fn clear_empties_the_model() {
    let mut model = ChartModel::new();
    model.add_entry(entry("Sam", 1));
    model.add_entry(entry("Eric", 2));

    model.clear();
    assert!(model.is_empty());
    assert_eq!(model.entries().count(), 0);
    assert!(!model.contains("Sam"));

    model.add_entry(entry("Eric", 2));
    assert_eq!(model.names().collect::<Vec<_>>(), ["Eric"]);
}

#[test]
fn contains_uses_original_case_keys() {
    let mut model = ChartModel::new();
    model.add_entry(entry("Eric", 2));
    assert!(model.contains("Eric"));
    assert!(!model.contains("eric"));
}
