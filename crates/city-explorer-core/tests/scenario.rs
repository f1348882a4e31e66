use city_explorer_core::prelude::*;
use city_explorer_core::{default_cities, filter_cities, STORAGE_KEY, MISSING_FIELDS_MESSAGE};

fn names<'a>(cities: impl IntoIterator<Item = &'a City>) -> Vec<&'a str> {
    cities.into_iter().map(|c| c.name()).collect()
}

#[test]
fn add_search_reset_walkthrough() {
    let mut explorer = CityExplorer::mount(MemoryStore::new());
    assert_eq!(explorer.cities(), default_cities().as_slice());

    explorer.set_new_city_name("Negombo");
    explorer.set_new_city_description("Coastal city");
    let outcome = explorer.add_city();
    assert_eq!(outcome, AddOutcome::Added(City::new(5, "Negombo", "Coastal city")));
    assert_eq!(explorer.cities().len(), 5);
    assert_eq!(explorer.new_city_name(), "");
    assert_eq!(explorer.new_city_description(), "");
    assert_eq!(explorer.error(), "");

    explorer.set_search_query("ne");
    assert_eq!(names(explorer.filtered_cities()), ["Negombo"]);

    explorer.reset();
    assert_eq!(explorer.cities(), default_cities().as_slice());
    let ids: Vec<_> = explorer.cities().iter().map(City::id).collect();
    assert_eq!(ids, [1, 2, 3, 4]);
    assert_eq!(explorer.search_query(), "");
}

#[test]
fn fresh_mount_sees_previous_session() {
    let mut first = CityExplorer::mount(MemoryStore::new());
    first.set_new_city_name("Anuradhapura");
    first.set_new_city_description("Ancient capital");
    first.add_city();
    let expected = first.cities().to_vec();

    let second = CityExplorer::mount(first.into_store());
    assert_eq!(second.cities(), expected.as_slice());
    assert_eq!(second.search_query(), "");
    assert_eq!(second.error(), "");
}

#[test]
fn reset_persists_defaults() {
    let mut explorer = CityExplorer::mount(MemoryStore::new());
    explorer.set_new_city_name("Hambantota");
    explorer.set_new_city_description("Port city");
    explorer.add_city();
    explorer.reset();

    let reloaded = CityExplorer::mount(explorer.into_store());
    assert_eq!(reloaded.cities(), default_cities().as_slice());
}

#[test]
fn reset_clears_every_transient_field() {
    let mut explorer = CityExplorer::mount(MemoryStore::new());
    explorer.set_search_query("col");
    explorer.set_new_city_name("half typed");
    explorer.add_city();
    assert_eq!(explorer.error(), MISSING_FIELDS_MESSAGE);

    explorer.reset();
    assert_eq!(explorer.search_query(), "");
    assert_eq!(explorer.new_city_name(), "");
    assert_eq!(explorer.new_city_description(), "");
    assert_eq!(explorer.error(), "");
}

#[test]
fn blank_fields_are_rejected_without_mutation() {
    for (name, description) in [("", "x"), ("x", ""), ("   ", "x"), ("x", "\t\n"), ("", "")] {
        let mut explorer = CityExplorer::mount(MemoryStore::new());
        explorer.set_new_city_name(name);
        explorer.set_new_city_description(description);
        assert_eq!(explorer.add_city(), AddOutcome::Rejected);
        assert_eq!(explorer.cities(), default_cities().as_slice());
        assert_eq!(explorer.error(), MISSING_FIELDS_MESSAGE);
        assert!(explorer.store().is_empty(), "nothing should be written");
    }
}

#[test]
fn ids_continue_from_stored_maximum() {
    let raw = r#"[{"id":2,"name":"Kandy","description":"Hills"},{"id":40,"name":"Mannar","description":"Island"}]"#;
    let mut explorer = CityExplorer::mount(MemoryStore::with_entry(STORAGE_KEY, raw));
    explorer.set_new_city_name("Vavuniya");
    explorer.set_new_city_description("Northern plains");
    assert_eq!(
        explorer.add_city(),
        AddOutcome::Added(City::new(41, "Vavuniya", "Northern plains"))
    );
}

#[test]
fn malformed_storage_mounts_defaults_silently() {
    let explorer = CityExplorer::mount(MemoryStore::with_entry(STORAGE_KEY, "{oops"));
    assert_eq!(explorer.cities(), default_cities().as_slice());
    assert_eq!(explorer.error(), "");
}

#[test]
fn filter_partitions_the_list() {
    let mut cities = default_cities();
    cities.push(City::new(5, "Negombo", "Coastal city"));
    cities.push(City::new(6, "NUWARA ELIYA", "Little England"));

    for query in ["", "a", "NE", "ne", "e", "lle", "x", "Eliya"] {
        let kept = filter_cities(&cities, query);
        let q = query.to_lowercase();
        for city in &cities {
            let matches = city.name().to_lowercase().contains(&q);
            assert_eq!(kept.contains(&city), matches, "query {query:?} city {}", city.name());
        }
    }
}
