use std::panic;
use leptos::logging::log;

use crate::config::DEFAULT_STORAGE_KEY;
use crate::storage::{BrowserStorage, KeyValueStorage};
use crate::store::decode_reviews;

/// Sets up a panic hook that, after the default console output, reports
/// whether the saved reviews survived. Owner disposal panics get extra hints.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") {
            log!("[PANIC] Leptos owner disposal detected. This usually happens when:");
            log!("[PANIC] 1. A toast timer fired after the page was unmounted");
            log!("[PANIC] 2. A board update ran after the review page was torn down");
        }

        report_saved_reviews();
    }));
}

fn report_saved_reviews() {
    match BrowserStorage.get(DEFAULT_STORAGE_KEY) {
        None => log!("[PANIC] No saved reviews under '{}'", DEFAULT_STORAGE_KEY),
        Some(raw) => match decode_reviews(&raw) {
            Ok(reviews) => log!("[PANIC] {} saved reviews are intact", reviews.len()),
            Err(e) => log!("[PANIC] Saved reviews are unreadable: {}", e),
        },
    }
}

/// Call once from the wasm entry point
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up successfully");
}
