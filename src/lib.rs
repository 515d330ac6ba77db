pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod confirm;
pub mod errors;
pub mod form;
pub mod models;
pub mod notify;
pub mod search;
pub mod storage;
pub mod store;
pub mod utils;

pub use board::ReviewBoard;
pub use errors::{Result, ReviewError};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    console_error_panic_hook::set_once();
    utils::panic_hook::init();

    leptos::mount_to_body(App);
}
