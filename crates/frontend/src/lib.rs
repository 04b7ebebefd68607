//! Rozklad Mini App - Yew WASM Frontend
//!
//! This crate provides the Telegram Mini App UI for the student schedule.

mod api;
mod app;
mod components;
mod pages;
mod telegram;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
