use wasm_bindgen_test::*;

use city_explorer_core::{KeyValueStore, STORAGE_KEY};
use city_explorer_wasm::{CityExplorerApp, LocalStorage};

wasm_bindgen_test_configure!(run_in_browser);

fn clear_stored_cities() {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .expect("localStorage available in test browser");
    storage.remove_item(STORAGE_KEY).unwrap();
}

#[wasm_bindgen_test]
fn starts_with_default_cities() {
    clear_stored_cities();
    let app = CityExplorerApp::new();
    assert_eq!(app.city_count(), 4);
}

#[wasm_bindgen_test]
fn local_storage_round_trips() {
    clear_stored_cities();
    let mut store = LocalStorage::from_window();
    assert_eq!(store.get(STORAGE_KEY), None);
    store.set(STORAGE_KEY, "[]").unwrap();
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("[]"));
}

#[wasm_bindgen_test]
fn added_city_survives_a_new_mount() {
    clear_stored_cities();
    let mut app = CityExplorerApp::new();
    app.set_new_city_name("Negombo");
    app.set_new_city_description("Coastal city");
    assert!(app.add_city());

    let mut reloaded = CityExplorerApp::new();
    assert_eq!(reloaded.city_count(), 5);

    reloaded.reset();
    assert_eq!(CityExplorerApp::new().city_count(), 4);
}

#[wasm_bindgen_test]
fn rejected_add_shows_error_in_markup() {
    clear_stored_cities();
    let mut app = CityExplorerApp::new();
    app.set_new_city_name("   ");
    assert!(!app.add_city());
    assert!(app
        .render_html()
        .contains("Both city name and description are required."));
}
