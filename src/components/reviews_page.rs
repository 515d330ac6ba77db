use leptos::*;
use leptos::logging::log;

use crate::board::ReviewBoard;
use crate::components::confirm_modal::ConfirmModal;
use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::components::search_banner::SearchBanner;
use crate::components::toast::{ToastStack, Toasts};
use crate::config::BoardConfig;
use crate::storage::{default_storage, KeyValueStorage};

/// The whole widget: search banner, add button, review cards and the two
/// modals, over the browser's storage.
#[component]
pub fn ReviewsPage() -> impl IntoView {
    view! { <ReviewBoardView storage=default_storage() config=BoardConfig::default() /> }
}

/// The widget over an explicit storage and configuration.
#[component]
pub fn ReviewBoardView(storage: Box<dyn KeyValueStorage>, config: BoardConfig) -> impl IntoView {
    let toasts = Toasts::new(config.toast_duration);
    let board = create_rw_signal(ReviewBoard::new(storage, config));
    provide_context(board);
    provide_context(toasts);

    // Storage only exists in the browser, so the list is read once the page
    // is live rather than during the server render.
    create_effect(move |_| {
        board.update(|b| b.reload());
        log!("[PAGE] Review board ready");
    });

    let add_new = move |_| {
        if let Some(Err(e)) = board.try_update(|b| b.start_create()) {
            log!("[PAGE] Cannot open form: {}", e);
        }
    };
    let form_open = move || board.with(|b| b.form().is_open());
    let gate_open = move || board.with(|b| !b.gate().is_idle());

    view! {
        <div class="page">
            <SearchBanner />
            <ToastStack />
            <div class="add-row">
                <button class="btn btn-add" disabled=gate_open on:click=add_new>
                    <span aria-hidden="true">"+"</span>
                    { "Add New Review" }
                </button>
            </div>
            <hr />
            <ReviewsList />
            <Show when=form_open>
                <ReviewForm />
            </Show>
            <Show when=gate_open>
                <ConfirmModal />
            </Show>
        </div>
    }
}
