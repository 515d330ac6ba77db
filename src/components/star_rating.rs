use leptos::*;
use crate::models::review::Rating;

/// Five stars, the first `rating` of them filled.
#[component]
pub fn StarRating(rating: Rating) -> impl IntoView {
    let filled = usize::from(rating.value());
    view! {
        <span class="stars" aria-label=format!("{} out of {}", rating, Rating::MAX)>
            {(0..usize::from(Rating::MAX))
                .map(|index| {
                    if index < filled {
                        view! { <span class="star star-filled">"★"</span> }
                    } else {
                        view! { <span class="star star-empty">"☆"</span> }
                    }
                })
                .collect_view()}
        </span>
    }
}
