//! Browser embedding: `window.open` navigation, `window.alert` warnings and
//! the wasm-bindgen surface the page script talks to.

use wasm_bindgen::prelude::*;

use crate::{
    core::{config::RouterConfig, geo::Point},
    host::{Alerts, Navigator, StaticHost},
    input::{
        events::{InputEvent, KeyCode, KeyModifiers},
        handler::{Session, TriggerOutcome},
    },
    router::{Router, ViewerUrl},
};

/// Opens viewer URLs in a new, unnamed tab
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open(&self, url: &ViewerUrl) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window to open {}", url);
            return;
        };
        if let Err(e) = window.open_with_url_and_target(url.as_str(), "_blank") {
            web_sys::console::error_1(&e);
        }
    }
}

/// Shows warnings with the browser's own alert dialog
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserAlerts;

impl Alerts for BrowserAlerts {
    fn warning(&self, title: &str, message: &str) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("{}: {}", title, message)));
        let Some(window) = web_sys::window() else {
            log::warn!("no window to alert {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(&format!("{}\n\n{}", title, message)) {
            web_sys::console::error_1(&e);
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Session handle exported to the page script
#[wasm_bindgen]
pub struct WasmSession {
    inner: Session<StaticHost, BrowserNavigator, BrowserAlerts>,
}

#[wasm_bindgen]
impl WasmSession {
    /// `config_json` is an optional partial `RouterConfig`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WasmSession, JsValue> {
        let config = match config_json {
            Some(json) => {
                RouterConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => RouterConfig::default(),
        };
        let host = StaticHost {
            country: None,
            region: None,
            zoom: 0,
            center: Point::default(),
        };
        Ok(WasmSession {
            inner: Session::new(config, host, BrowserNavigator, BrowserAlerts),
        })
    }

    /// Refreshes the viewport snapshot; `x`/`y` are Web Mercator meters
    pub fn set_view(
        &mut self,
        country: Option<String>,
        region: Option<String>,
        zoom: u8,
        x: f64,
        y: f64,
    ) {
        let host = self.inner.host_mut();
        host.country = country;
        host.region = region;
        host.zoom = zoom;
        host.center = Point::new(x, y);
    }

    /// Button click. Always returns true: the link's default action is suppressed.
    pub fn click(&mut self) -> bool {
        self.inner
            .handle_event(&InputEvent::ButtonClick)
            .is_handled()
    }

    /// `keydown` with the DOM `key` value; true when the page should prevent default
    pub fn key_down(&mut self, key: &str) -> bool {
        self.inner
            .handle_event(&InputEvent::KeyPress {
                key: KeyCode::from_dom_key(key),
                modifiers: KeyModifiers::default(),
            })
            .is_handled()
    }

    pub fn pointer_over_map(&mut self, over: bool) {
        let event = if over {
            InputEvent::PointerEnterMap
        } else {
            InputEvent::PointerLeaveMap
        };
        self.inner.handle_event(&event);
    }

    pub fn set_hotkey_enabled(&mut self, enabled: bool) {
        self.inner.handle_event(&InputEvent::HotkeyToggled(enabled));
    }

    pub fn hotkey_enabled(&self) -> bool {
        self.inner.hotkey_enabled()
    }

    /// Routes without opening anything; returns the URL or the warning text
    pub fn preview(&self) -> Result<String, JsValue> {
        Router::new(self.inner.config().clone())
            .route(self.inner.host())
            .map(ViewerUrl::into_string)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Triggers routing; returns the opened URL, if any
    pub fn trigger(&mut self) -> Option<String> {
        match self.inner.trigger() {
            TriggerOutcome::Opened(url) => Some(url.into_string()),
            TriggerOutcome::Warned(_) | TriggerOutcome::Suppressed(_) => None,
        }
    }
}
