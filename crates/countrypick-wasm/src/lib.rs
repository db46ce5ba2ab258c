//! countrypick-wasm — WebAssembly bindings for countrypick-core
//!
//! Exposes the country picker model to a JavaScript list widget. The widget
//! asks a `Picker` for section/row counts and cells, feeds it the search
//! field's text, and reports row taps together with a callback that receives
//! the chosen country.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - `get_country_count()`, `get_stats()`
//! - `new Picker(withHome)` / `Picker.withHomeJson(json)` with
//!   `sectionCount`, `rowCount`, `sectionTitle`, `sectionIndexTitles`,
//!   `cell`, `updateSearch`, `setSearchActive`, `isFiltering`, `select`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { Picker } from 'countrypick-wasm';
//!
//! async function main() {
//!   await init();
//!   const picker = new Picker(true);
//!   picker.updateSearch('ral');
//!   console.log(picker.cell(0, 0)); // { title: "Australia", phone: "+61", flag: "AU" }
//!   picker.select(0, 0, (country) => console.log('picked', country));
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The country table is the one bundled with `countrypick-core`.
//! - Cells and countries cross the boundary as plain JSON-serializable
//!   objects.

use std::rc::Rc;
use wasm_bindgen::prelude::*;

// Core Imports
use countrypick_core::{Country, CountryPicker, CountrySelectionDelegate, CountryTable, HomeRegion};
use serde::Serialize;
use serde_json::json;
use serde_wasm_bindgen::to_value;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing country picker WASM module...".into());

    match CountryTable::builtin() {
        Ok(table) => {
            web_sys::console::log_1(&format!("✓ Loaded {} countries", table.len()).into())
        }
        Err(e) => web_sys::console::error_1(&format!("Country table failed: {e}").into()),
    }
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    to_value(value).unwrap_or(JsValue::NULL)
}

/// JS-facing view of a country.
#[derive(Serialize)]
struct CountryView<'a> {
    name: &'a str,
    iso: &'a str,
    dial: String,
    flag: Option<&'a str>,
    emoji: Option<String>,
}

impl<'a> From<&'a Country> for CountryView<'a> {
    fn from(c: &'a Country) -> Self {
        CountryView {
            name: c.name(),
            iso: c.iso_code().as_str(),
            dial: c.formatted_dial_code(),
            flag: c.flag().map(|f| f.code()),
            emoji: c.flag().map(|f| f.emoji()),
        }
    }
}

/// Forwards the selection to a JS callback.
struct JsDelegate(js_sys::Function);

impl CountrySelectionDelegate for JsDelegate {
    fn set_country(&self, country: &Country) {
        let value = to_js(&CountryView::from(country));
        if let Err(e) = self.0.call1(&JsValue::NULL, &value) {
            web_sys::console::error_2(&"selection callback threw".into(), &e);
        }
    }
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_country_count() -> usize {
    CountryTable::builtin().map(|t| t.len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    let picker = Picker::new(true)?;
    let stats = picker.inner.stats();
    let stats = json!({
        "countries": stats.countries,
        "sections": stats.sections,
        "rows": stats.rows
    });
    Ok(to_js(&stats))
}

/* --------------------------------------------------------------------------
   Picker
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub struct Picker {
    inner: CountryPicker,
}

#[wasm_bindgen]
impl Picker {
    /// Picker over the bundled table, with or without the default home
    /// section.
    #[wasm_bindgen(constructor)]
    pub fn new(with_home: bool) -> Result<Picker, JsValue> {
        let table = CountryTable::builtin().map_err(js_err)?;
        let home = with_home.then(HomeRegion::default);
        Ok(Picker {
            inner: CountryPicker::new(table, home),
        })
    }

    /// Picker with a home section described by JSON
    /// (`{ "title": ..., "entries": [ { "name", "iso2", "phone_code" } ] }`).
    #[wasm_bindgen(js_name = withHomeJson)]
    pub fn with_home_json(json: &str) -> Result<Picker, JsValue> {
        let table = CountryTable::builtin().map_err(js_err)?;
        let home = HomeRegion::from_json_reader(json.as_bytes()).map_err(js_err)?;
        Ok(Picker {
            inner: CountryPicker::new(table, Some(home)),
        })
    }

    #[wasm_bindgen(js_name = sectionCount)]
    pub fn section_count(&self) -> usize {
        self.inner.section_count()
    }

    #[wasm_bindgen(js_name = rowCount)]
    pub fn row_count(&self, section: usize) -> usize {
        self.inner.row_count(section)
    }

    #[wasm_bindgen(js_name = sectionTitle)]
    pub fn section_title(&self, section: usize) -> Option<String> {
        self.inner.section_title(section).map(str::to_string)
    }

    /// Index-bar labels, or `undefined` while filtering.
    #[wasm_bindgen(js_name = sectionIndexTitles)]
    pub fn section_index_titles(&self) -> Option<Vec<String>> {
        self.inner.section_index_titles()
    }

    /// `{ title, phone, flag }` for the row, or `null`.
    pub fn cell(&self, section: usize, row: usize) -> JsValue {
        match self.inner.cell(section, row) {
            Some(cell) => to_js(&cell),
            None => JsValue::NULL,
        }
    }

    #[wasm_bindgen(js_name = updateSearch)]
    pub fn update_search(&mut self, query: &str) {
        self.inner.update_search(query);
    }

    #[wasm_bindgen(js_name = setSearchActive)]
    pub fn set_search_active(&mut self, active: bool) {
        self.inner.set_search_active(active);
    }

    #[wasm_bindgen(js_name = isFiltering)]
    pub fn is_filtering(&self) -> bool {
        self.inner.is_filtering()
    }

    #[wasm_bindgen(js_name = isClosed)]
    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    /// Picks the row and hands the country to `callback` once. Returns the
    /// country, or `null` when the row does not exist or the picker is closed.
    pub fn select(&mut self, section: usize, row: usize, callback: js_sys::Function) -> JsValue {
        let delegate: Rc<dyn CountrySelectionDelegate> = Rc::new(JsDelegate(callback));
        self.inner.set_delegate(&delegate);
        match self.inner.select(section, row) {
            Some(country) => to_js(&CountryView::from(&country)),
            None => JsValue::NULL,
        }
    }
}
