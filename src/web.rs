//! Browser binding: a `web_sys` element provider and the handle page script
//! wires to the seek input, e.g. `oninput="seekTimes.update(this)"`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::config::SeekBarConfig;
use crate::error::SeekError;
use crate::provider::{ElementProvider, SeekControl, TextLabel};
use crate::seek::SeekTimes;

pub struct DomProvider {
    document: Document,
}

impl DomProvider {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Provider for the current window's document.
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document))
    }
}

impl ElementProvider for DomProvider {
    type Container = Element;
    type Label = HtmlElement;

    fn find_container(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn find_label(&self, container: &Element, selector: &str) -> Option<HtmlElement> {
        container
            .query_selector(selector)
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl TextLabel for HtmlElement {
    fn set_text(&self, text: &str) {
        self.set_inner_text(text);
    }
}

impl SeekControl for HtmlInputElement {
    fn value(&self) -> String {
        HtmlInputElement::value(self)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

fn to_js(e: SeekError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Owns the label cache for one page.
#[wasm_bindgen]
pub struct SeekTimesHandle {
    provider: DomProvider,
    times: SeekTimes<DomProvider>,
}

#[wasm_bindgen]
impl SeekTimesHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SeekTimesHandle, JsValue> {
        Self::with_config(SeekBarConfig::default())
    }

    /// Build from a TOML config string.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(toml: &str) -> Result<SeekTimesHandle, JsValue> {
        let cfg = SeekBarConfig::from_toml_str(toml)
            .map_err(|e| JsValue::from_str(&format!("Invalid seek bar config: {e}")))?;
        Self::with_config(cfg)
    }

    pub fn update(&mut self, input: &HtmlInputElement) -> Result<(), JsValue> {
        self.times
            .update_seek_times(&self.provider, input)
            .map_err(to_js)
    }

    pub fn reset(&mut self) {
        self.times.reset();
    }
}

impl SeekTimesHandle {
    fn with_config(cfg: SeekBarConfig) -> Result<SeekTimesHandle, JsValue> {
        let provider =
            DomProvider::from_window().ok_or_else(|| JsValue::from_str("No document available"))?;
        Ok(Self {
            provider,
            times: SeekTimes::new(cfg),
        })
    }
}
