use leptos::*;
use leptos::logging::log;

use crate::board::ReviewBoard;
use crate::components::star_rating::StarRating;
use crate::components::toast::Toasts;
use crate::models::review::Review;
use crate::notify::Notification;

/// The filtered review cards, newest first.
#[component]
pub fn ReviewsList() -> impl IntoView {
    let board = expect_context::<RwSignal<ReviewBoard>>();
    let visible = move || {
        board.with(|b| b.visible_reviews().into_iter().cloned().collect::<Vec<Review>>())
    };

    view! {
        <div class="reviews">
            <h2>{ "Recent Review" }</h2>
            <Show when=move || visible().is_empty()>
                <p class="no-reviews">{ "No reviews found." }</p>
            </Show>
            { move || {
                visible().into_iter().map(|review| {
                    view! { <ReviewCard review=review /> }
                }).collect_view()
            }}
        </div>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let board = expect_context::<RwSignal<ReviewBoard>>();
    let toasts = expect_context::<Toasts>();
    let id = review.id;
    let locked = move || board.with(|b| !b.gate().is_idle());

    let edit = move |_| {
        if let Some(Err(e)) = board.try_update(|b| b.start_edit(id)) {
            log!("[LIST] Cannot edit {}: {}", id, e);
            toasts.push(Notification::from(&e));
        }
    };
    let delete = move |_| {
        if let Some(Err(e)) = board.try_update(|b| b.request_delete(id)) {
            log!("[LIST] Cannot delete {}: {}", id, e);
        }
    };

    view! {
        <div class="review-card">
            <div class="review-header">
                <h3>{ review.shop_name }</h3>
                <StarRating rating=review.rating />
            </div>
            <div class="review-date">{ review.date }</div>
            <p class="review-text">{ review.review_text }</p>
            <div class="review-actions">
                <button class="btn btn-edit" disabled=locked on:click=edit>{ "Edit" }</button>
                <button class="btn btn-delete" disabled=locked on:click=delete>{ "Delete" }</button>
            </div>
        </div>
    }
}
