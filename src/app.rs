/// Root of the shop review widget.
/// Sets up page metadata and routes the root path to the review page.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::reviews_page::ReviewsPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/shop_reviews.css" />
        <Title text="Shop Reviews" />
        <Meta name="description" content="Write, edit and search short shop reviews" />
        <Router>
            <main>
                <Routes>
                    <Route path="" view=ReviewsPage />
                </Routes>
            </main>
        </Router>
    }
}
