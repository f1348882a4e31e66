// crates/city-explorer-core/src/view.rs

//! # View
//!
//! A render-ready snapshot of a [`CityExplorer`] plus an HTML renderer. The
//! browser binding either hands the snapshot to JavaScript or injects the
//! rendered markup directly.

use crate::explorer::CityExplorer;
use crate::store::KeyValueStore;
use serde::Serialize;
use std::fmt::Write;

pub const TITLE: &str = "City Explorer";
pub const LIST_HEADING: &str = "Available Cities";
pub const FORM_HEADING: &str = "Add a New City";
pub const SEARCH_PLACEHOLDER: &str = "Search for a city";
pub const NAME_PLACEHOLDER: &str = "City Name";
pub const DESCRIPTION_PLACEHOLDER: &str = "City Description";
pub const ADD_BUTTON_LABEL: &str = "Add City";
pub const RESET_BUTTON_LABEL: &str = "Reset";
pub const NO_CITIES_TEXT: &str = "No cities found";

pub const SEARCH_INPUT_ID: &str = "search-input";
pub const NAME_INPUT_ID: &str = "city-name-input";
pub const DESCRIPTION_INPUT_ID: &str = "city-description-input";
pub const ADD_BUTTON_ID: &str = "add-city-button";
pub const RESET_BUTTON_ID: &str = "reset-button";

/// One line of the rendered list. Only the name is shown for a city.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListItem {
    City { id: u64, name: String },
    Placeholder { text: String },
}

/// Everything the presentation layer needs for one render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExplorerView {
    pub search_query: String,
    pub items: Vec<ListItem>,
    pub new_city_name: String,
    pub new_city_description: String,
    /// `None` hides the error banner.
    pub error: Option<String>,
}

impl ExplorerView {
    pub fn from_explorer<S: KeyValueStore>(explorer: &CityExplorer<S>) -> Self {
        let mut items: Vec<ListItem> = explorer
            .filtered_cities()
            .into_iter()
            .map(|c| ListItem::City {
                id: c.id,
                name: c.name.clone(),
            })
            .collect();
        if items.is_empty() {
            items.push(ListItem::Placeholder {
                text: NO_CITIES_TEXT.to_string(),
            });
        }

        let error = Some(explorer.error())
            .filter(|e| !e.is_empty())
            .map(str::to_string);

        Self {
            search_query: explorer.search_query().to_string(),
            items,
            new_city_name: explorer.new_city_name().to_string(),
            new_city_description: explorer.new_city_description().to_string(),
            error,
        }
    }
}

/// Renders the widget as an HTML fragment.
///
/// The `*_ID` element ids are the hooks the browser binding attaches its
/// listeners to.
pub fn render_html(view: &ExplorerView) -> String {
    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = write_html(&mut html, view);
    html
}

fn write_html(out: &mut String, view: &ExplorerView) -> std::fmt::Result {
    writeln!(out, "<div>")?;
    writeln!(out, "<h1>{TITLE}</h1>")?;

    writeln!(out, r#"<div class="mb-3">"#)?;
    writeln!(
        out,
        r#"<input type="text" id="{SEARCH_INPUT_ID}" class="form-control" placeholder="{SEARCH_PLACEHOLDER}" value="{}" />"#,
        escape(&view.search_query)
    )?;
    writeln!(out, "</div>")?;

    writeln!(out, "<h3>{LIST_HEADING}</h3>")?;
    writeln!(out, r#"<ul class="list-group mb-4">"#)?;
    for item in &view.items {
        match item {
            ListItem::City { id, name } => writeln!(
                out,
                r#"<li class="list-group-item" data-id="{id}"><strong>{}</strong><br /></li>"#,
                escape(name)
            )?,
            ListItem::Placeholder { text } => writeln!(
                out,
                r#"<li class="list-group-item text-muted">{}</li>"#,
                escape(text)
            )?,
        }
    }
    writeln!(out, "</ul>")?;

    writeln!(out, "<h3>{FORM_HEADING}</h3>")?;
    writeln!(out, r#"<div class="mb-3">"#)?;
    writeln!(
        out,
        r#"<input type="text" id="{NAME_INPUT_ID}" class="form-control mb-2" placeholder="{NAME_PLACEHOLDER}" value="{}" />"#,
        escape(&view.new_city_name)
    )?;
    writeln!(
        out,
        r#"<input type="text" id="{DESCRIPTION_INPUT_ID}" class="form-control mb-2" placeholder="{DESCRIPTION_PLACEHOLDER}" value="{}" />"#,
        escape(&view.new_city_description)
    )?;
    writeln!(
        out,
        r#"<button id="{ADD_BUTTON_ID}" class="btn btn-success me-2">{ADD_BUTTON_LABEL}</button>"#
    )?;
    writeln!(
        out,
        r#"<button id="{RESET_BUTTON_ID}" class="btn btn-danger">{RESET_BUTTON_LABEL}</button>"#
    )?;
    writeln!(out, "</div>")?;

    if let Some(error) = &view.error {
        writeln!(out, r#"<div class="alert alert-danger">{}</div>"#, escape(error))?;
    }
    write!(out, "</div>")
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
