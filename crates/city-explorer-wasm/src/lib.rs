//! city-explorer-wasm — WebAssembly binding for city-explorer-core
//!
//! This crate puts the City Explorer widget in the browser. The city list is
//! persisted to `window.localStorage` under the `"cities"` key.
//!
//! What it provides
//! ----------------
//! - Panic hook and console logging on module load (via `#[wasm_bindgen(start)]`)
//! - `mount(elementId)`: renders the widget into an element and wires its events
//! - `CityExplorerApp`: the same component as a class, for callers that do
//!   their own rendering (`view()` returns a plain JS object)
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { mount } from 'city-explorer-wasm';
//!
//! async function main() {
//!   await init();
//!   mount('app');
//! }
//! main();
//! ```
//!
//! Driving it yourself
//! -------------------
//! ```javascript
//! import init, { CityExplorerApp } from 'city-explorer-wasm';
//!
//! (async () => {
//!   await init();
//!   const app = new CityExplorerApp();
//!   app.set_search_query('ka');
//!   console.log(app.view().items); // [{ kind: 'city', id: 2, name: 'Kandy' }]
//! })();
//! ```
//!
//! Notes
//! -----
//! - If `localStorage` is unavailable (privacy mode, sandboxed iframe) the
//!   widget starts from the default cities and writes are dropped.
//! - See the `dist/` folder for a demo page.
use std::cell::RefCell;
use std::rc::Rc;

use city_explorer_core::view::{
    ADD_BUTTON_ID, DESCRIPTION_INPUT_ID, NAME_INPUT_ID, RESET_BUTTON_ID, SEARCH_INPUT_ID,
};
use city_explorer_core::{render_html, CityExplorer, ExplorerError, ExplorerView, KeyValueStore};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (e.g. from tests) reports an error we can ignore.
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("City Explorer WASM module initialized");
}

/* --------------------------------------------------------------------------
   localStorage adapter
-------------------------------------------------------------------------- */

/// [`KeyValueStore`] over the browser's `window.localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Binds to the current window's storage, if the browser grants it.
    pub fn from_window() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable, cities will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> city_explorer_core::Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| ExplorerError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| ExplorerError::Storage(format!("{e:?}")))
    }
}

/* --------------------------------------------------------------------------
   JS class
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub struct CityExplorerApp {
    inner: CityExplorer<LocalStorage>,
}

impl Default for CityExplorerApp {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CityExplorerApp {
    /// Mounts a fresh component against `window.localStorage`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: CityExplorer::mount(LocalStorage::from_window()),
        }
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.inner.set_search_query(query);
    }

    pub fn set_new_city_name(&mut self, name: &str) {
        self.inner.set_new_city_name(name);
    }

    pub fn set_new_city_description(&mut self, description: &str) {
        self.inner.set_new_city_description(description);
    }

    /// Returns `true` if the city was appended, `false` if the form was rejected.
    pub fn add_city(&mut self) -> bool {
        self.inner.add_city().is_added()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    pub fn city_count(&self) -> usize {
        self.inner.cities().len()
    }

    /// The current view model as a plain JS object.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_value(&ExplorerView::from_explorer(&self.inner)).map_err(JsValue::from)
    }

    pub fn render_html(&self) -> String {
        render_html(&ExplorerView::from_explorer(&self.inner))
    }
}

/* --------------------------------------------------------------------------
   DOM mount
-------------------------------------------------------------------------- */

/// Renders the widget into `#element_id` and re-renders after every event.
#[wasm_bindgen]
pub fn mount(element_id: &str) -> Result<(), JsValue> {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
        .ok_or_else(|| JsValue::from_str(&format!("element #{element_id} not found")))?;

    let app = Rc::new(RefCell::new(CityExplorerApp::new()));
    root.set_inner_html(&app.borrow().render_html());

    let on_input = {
        let app = Rc::clone(&app);
        let root = root.clone();
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let id = input.id();
            let value = input.value();
            match id.as_str() {
                SEARCH_INPUT_ID => app.borrow_mut().set_search_query(&value),
                NAME_INPUT_ID => app.borrow_mut().set_new_city_name(&value),
                DESCRIPTION_INPUT_ID => app.borrow_mut().set_new_city_description(&value),
                _ => return,
            }
            rerender(&root, &app.borrow(), Some(&id));
        })
    };
    root.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();

    let on_click = {
        let app = Rc::clone(&app);
        let root = root.clone();
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            match target.id().as_str() {
                ADD_BUTTON_ID => {
                    app.borrow_mut().add_city();
                }
                RESET_BUTTON_ID => app.borrow_mut().reset(),
                _ => return,
            }
            rerender(&root, &app.borrow(), None);
        })
    };
    root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    log::info!("mounted City Explorer into #{element_id}");
    Ok(())
}

// Replacing the markup drops focus, so the input being typed into gets it back.
fn rerender(root: &Element, app: &CityExplorerApp, focused_id: Option<&str>) {
    root.set_inner_html(&app.render_html());

    let Some(id) = focused_id else { return };
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
    if let Some(input) = input {
        let _ = input.focus();
        let end = input.value().encode_utf16().count() as u32;
        let _ = input.set_selection_range(end, end);
    }
}
