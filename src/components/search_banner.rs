use leptos::*;

use crate::board::ReviewBoard;

/// Page banner with the shop-name search box.
#[component]
pub fn SearchBanner() -> impl IntoView {
    let board = expect_context::<RwSignal<ReviewBoard>>();

    view! {
        <section class="banner">
            <p class="banner-kicker">{ "Find Your Review Experience" }</p>
            <h1>{ "Discover & Promote" }<br />{ "Upcoming Review" }</h1>
            <div class="search-box">
                <input
                    type="text"
                    placeholder="Search Review"
                    prop:value=move || board.with(|b| b.search_term().to_string())
                    on:input=move |e| board.update(|b| b.set_search_term(event_target_value(&e)))
                />
                <span class="search-icon" aria-hidden="true">"⌕"</span>
            </div>
        </section>
    }
}
