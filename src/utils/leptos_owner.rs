use leptos::Owner;

/// Runs `f` under `owner`, captured earlier with `Owner::current()`.
/// Deferred callbacks (timers) have no owner of their own; if the captured
/// one is missing or already disposed this logs and returns None.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    let Some(owner) = owner else {
        leptos::logging::log!("[OWNER] No Leptos owner captured: {}", log_context);
        return None;
    };
    match leptos::try_with_owner(owner, f) {
        Ok(value) => Some(value),
        Err(_) => {
            leptos::logging::log!("[OWNER] Owner disposed before callback ran: {}", log_context);
            None
        }
    }
}
