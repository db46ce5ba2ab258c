use countrypick_core::prelude::*;
use countrypick_core::text::section_initial;
use std::collections::HashMap;
use std::rc::Rc;

fn builtin_picker() -> CountryPicker {
    CountryPicker::with_default_home(CountryTable::builtin().unwrap())
}

#[test]
fn every_country_appears_in_exactly_one_section() {
    let picker = builtin_picker();
    let home = HomeRegion::australia();

    let mut seen: HashMap<String, usize> = HashMap::new();
    for section in picker.index().sections() {
        for c in &section.countries {
            *seen.entry(c.iso_code().to_string()).or_default() += 1;
        }
    }

    for c in picker.table().iter() {
        assert_eq!(seen.get(c.iso_code().as_str()), Some(&1), "{}", c.name());
    }

    // Home entries only live in the home section.
    for entry in &home.entries {
        for section in &picker.index().sections()[1..] {
            assert!(
                !section.countries.iter().any(|c| c.iso_code() == entry.iso_code()),
                "{} duplicated under {}",
                entry.name(),
                section.key
            );
        }
    }
}

#[test]
fn home_first_then_alphabetical_sections() {
    let picker = builtin_picker();
    let keys = picker.index().keys();
    assert_eq!(keys[0], HOME_SECTION_KEY);

    let letters = &keys[1..];
    let mut sorted = letters.to_vec();
    sorted.sort_unstable();
    assert_eq!(letters, sorted.as_slice());

    for section in &picker.index().sections()[1..] {
        for c in &section.countries {
            assert_eq!(section_initial(c.name()), section.key);
        }
    }
}

#[test]
fn empty_query_restores_grouped_view() {
    let mut picker = builtin_picker();
    let grouped = picker.section_count();
    assert!(grouped > 1);

    picker.update_search("zeal");
    assert_eq!(picker.section_count(), 1);
    assert_eq!(picker.row_count(0), 1);

    picker.update_search("");
    assert_eq!(picker.section_count(), grouped);
    assert!(picker.section_index_titles().is_some());
}

#[test]
fn unmatched_query_yields_single_empty_section() {
    let mut picker = builtin_picker();
    picker.update_search("qqqq");
    assert_eq!(picker.section_count(), 1);
    assert_eq!(picker.row_count(0), 0);
    assert!(picker.cell(0, 0).is_none());
}

#[test]
fn filter_preserves_alphabetical_order() {
    let mut picker = builtin_picker();
    picker.update_search("ISLAND");
    let names: Vec<&str> = picker.rows(0).iter().map(Country::name).collect();
    assert!(names.len() > 5);
    assert!(names.contains(&"Norfolk Island"));

    let table_order: Vec<&str> = picker
        .table()
        .iter()
        .map(Country::name)
        .filter(|n| names.contains(n))
        .collect();
    assert_eq!(names, table_order);
}

#[test]
fn selection_through_channel_delegate() {
    let mut picker = builtin_picker();
    let (tx, rx) = crossbeam_channel::unbounded();
    let delegate: Rc<dyn CountrySelectionDelegate> = Rc::new(tx);
    picker.set_delegate(&delegate);

    let section = picker.index().position_of("B").unwrap();
    let expected = picker.country_at(section, 0).cloned().unwrap();
    let chosen = picker.select(section, 0).unwrap();

    assert_eq!(chosen, expected);
    assert_eq!(rx.try_recv().unwrap(), expected);
    assert!(picker.select(section, 0).is_none());
    assert!(rx.try_recv().is_err());
}

#[test]
fn small_dataset_example() {
    let table = CountryTable::new(vec![
        Country::new("Australia", "AU", "61", Some("AU")).unwrap(),
        Country::new("Austria", "AT", "43", Some("AT")).unwrap(),
        Country::new("Belgium", "BE", "32", Some("BE")).unwrap(),
    ])
    .unwrap();
    let mut picker = CountryPicker::new(table, Some(HomeRegion::australia()));

    let home: Vec<&str> = picker.rows(0).iter().map(Country::name).collect();
    assert_eq!(home, ["Australia", "Norfolk Island"]);
    assert_eq!(picker.section_title(1), Some("A"));
    assert_eq!(picker.country_at(1, 0).map(Country::name), Some("Austria"));
    assert_eq!(picker.country_at(2, 0).map(Country::name), Some("Belgium"));

    picker.update_search("aus");
    let found: Vec<&str> = picker.rows(0).iter().map(Country::name).collect();
    assert_eq!(found, ["Australia", "Austria"]);
}

#[test]
fn custom_home_region_replaces_default() {
    let json = r#"{
        "title": "New Zealand",
        "index_label": "*",
        "entries": [
            { "name": "New Zealand", "iso2": "NZ", "phone_code": "64", "flag": "NZ" },
            { "name": "Tokelau", "iso2": "TK", "phone_code": "690", "flag": "TK" }
        ]
    }"#;
    let home = HomeRegion::from_json_reader(json.as_bytes()).unwrap();
    let picker = CountryPicker::new(CountryTable::builtin().unwrap(), Some(home));

    assert_eq!(picker.section_title(0), Some("New Zealand"));
    assert_eq!(picker.section_index_titles().unwrap()[0], "*");
    let n = picker.index().countries_for_key("N");
    assert!(n.iter().any(|c| c.name() == "Norfolk Island"));
    assert!(!n.iter().any(|c| c.name() == "New Zealand"));
}

#[test]
fn no_home_region() {
    let picker = CountryPicker::new(CountryTable::builtin().unwrap(), None);
    assert_eq!(picker.index().keys()[0], "A");
    assert_eq!(picker.stats().rows, picker.stats().countries);
}

#[test]
fn table_files_round_trip_through_loader() {
    let dir = tempfile::tempdir().unwrap();
    let table = CountryTable::builtin().unwrap();

    let plain = dir.path().join("countries.bin");
    table.write_snapshot(&plain, CompressionMode::None).unwrap();
    let restored = CountryTable::load_from_path(&plain).unwrap();
    assert_eq!(restored.countries(), table.countries());

    let json = dir.path().join("countries.json");
    std::fs::write(&json, countrypick_core::loader::BUILTIN_JSON).unwrap();
    assert_eq!(CountryTable::load_from_path(&json).unwrap().len(), table.len());

    let missing = CountryTable::load_from_path(dir.path().join("nope.json"));
    assert!(matches!(missing, Err(PickerError::NotFound(_))));
}

#[cfg(feature = "compact")]
#[test]
fn gzip_snapshot_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let table = CountryTable::builtin().unwrap();
    let path = dir.path().join("countries.bin.gz");
    table.write_snapshot(&path, CompressionMode::Gzip).unwrap();
    assert_eq!(CountryTable::load_from_path(&path).unwrap().len(), table.len());
}

#[test]
fn invalid_rows_fail_the_load() {
    let bad = r#"[ { "name": "Nowhere", "iso2": "N", "phone_code": "0" } ]"#;
    assert!(matches!(
        CountryTable::from_json_str(bad),
        Err(PickerError::InvalidCountry { .. })
    ));
    let dup = r#"[
        { "name": "A", "iso2": "AA", "phone_code": "1" },
        { "name": "B", "iso2": "aa", "phone_code": "2" }
    ]"#;
    assert!(matches!(
        CountryTable::from_json_str(dup),
        Err(PickerError::DuplicateIsoCode(_))
    ));
}
