use leptos::*;

use crate::board::ReviewBoard;
use crate::components::toast::Toasts;

/// Confirmation prompt for a pending update or delete.
#[component]
pub fn ConfirmModal() -> impl IntoView {
    let board = expect_context::<RwSignal<ReviewBoard>>();
    let toasts = expect_context::<Toasts>();

    let prompt = move || board.with(|b| b.gate().prompt());
    let confirm_class = move || {
        if board.with(|b| b.gate().is_destructive()) {
            "btn btn-delete"
        } else {
            "btn btn-update"
        }
    };

    let confirm = move |_| {
        if let Some(notification) = board.try_update(|b| b.confirm()).flatten() {
            toasts.push(notification);
        }
    };

    view! {
        <div class="modal-backdrop modal-backdrop-light">
            <div class="modal modal-confirm">
                <h2>{ prompt }</h2>
                <div class="confirm-actions">
                    <button class="btn btn-cancel" on:click=move |_| board.update(|b| b.cancel_confirmation())>
                        { "Cancel" }
                    </button>
                    <button class=confirm_class on:click=confirm>{ "Confirm" }</button>
                </div>
            </div>
        </div>
    }
}
