//! Telegram WebApp host interop.
//!
//! The Mini App runs inside Telegram's web view, which injects a
//! `window.Telegram.WebApp` object. Everything here degrades to a no-op
//! when the app is opened in a plain browser.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

fn web_app() -> Option<JsValue> {
    let window = web_sys::window()?;
    let telegram = Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
    if telegram.is_undefined() || telegram.is_null() {
        return None;
    }
    let web_app = Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
    if web_app.is_undefined() || web_app.is_null() {
        None
    } else {
        Some(web_app)
    }
}

/// Raw `initData` credential from the Telegram host, used as the bearer
/// token on authenticated requests.
pub fn init_data() -> Option<String> {
    let web_app = web_app()?;
    Reflect::get(&web_app, &JsValue::from_str("initData"))
        .ok()?
        .as_string()
}

/// Tell the host the app has rendered and can be shown.
pub fn ready() {
    let Some(web_app) = web_app() else { return };
    if let Ok(ready) = Reflect::get(&web_app, &JsValue::from_str("ready")) {
        if let Some(function) = ready.dyn_ref::<Function>() {
            let _ = function.call0(&web_app);
        }
    }
}
