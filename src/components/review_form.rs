use leptos::*;
use leptos::ev::SubmitEvent;

use crate::board::ReviewBoard;
use crate::components::toast::Toasts;
use crate::models::review::Rating;

/// Add/edit modal. Rendered only while the form is open.
#[component]
pub fn ReviewForm() -> impl IntoView {
    let board = expect_context::<RwSignal<ReviewBoard>>();
    let toasts = expect_context::<Toasts>();

    let shop_name = move || board.with(|b| b.form().shop_name().to_string());
    let review_text = move || board.with(|b| b.form().review_text().to_string());
    let rating = move || board.with(|b| b.form().rating());
    let title = move || board.with(|b| b.form().title());
    let submit_label = move || board.with(|b| b.form().submit_label());
    let submit_class = move || {
        if board.with(|b| b.form().is_editing()) {
            "btn btn-update"
        } else {
            "btn btn-submit"
        }
    };

    let submit_review = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(notification) = board.try_update(|b| b.submit()).flatten() {
            toasts.push(notification);
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h1>{ title }</h1>
                <form on:submit=submit_review>
                    <label for="shop-name">{ "Shop Name:" }</label>
                    <input
                        id="shop-name"
                        type="text"
                        placeholder="Enter shop name"
                        prop:value=shop_name
                        on:input=move |e| board.update(|b| b.form_mut().set_shop_name(event_target_value(&e)))
                    />
                    <label for="review-text">{ "Review:" }</label>
                    <textarea
                        id="review-text"
                        rows="4"
                        placeholder="Write your review here"
                        prop:value=review_text
                        on:input=move |e| board.update(|b| b.form_mut().set_review_text(event_target_value(&e)))
                    />
                    <label for="rating">{ "Rating:" }</label>
                    <select
                        id="rating"
                        on:change=move |e| board.update(|b| b.form_mut().set_rating_input(&event_target_value(&e)))
                    >
                        { Rating::descending().map(move |star| view! {
                            <option
                                value=star.to_string()
                                prop:selected=move || rating() == star
                            >
                                { star.label() }
                            </option>
                        }).collect_view() }
                    </select>
                    <div class="form-actions">
                        <button type="submit" class=submit_class>{ submit_label }</button>
                        <button
                            type="button"
                            class="btn btn-cancel"
                            on:click=move |_| board.update(|b| b.close_form())
                        >
                            { "Cancel" }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
