//! Home page: the browsable book collection with decorative chrome.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::book_list::BookList;
use crate::components::error_boundary::PageErrorBoundary;
use crate::components::floating_images::FloatingImages;
use crate::components::footer::Footer;

/// Home page. Owns the selection handler: picking a card navigates to the
/// book's detail route through the ambient router context.
#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let on_book_select = Callback::new(move |id: u64| {
        navigate(&format!("/books/{id}"), NavigateOptions::default());
    });

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Book Club"</h1>
                <p class="home-page__subtitle">"Find your next read."</p>
            </header>
            <FloatingImages/>
            <main class="home-page__main">
                <PageErrorBoundary>
                    <BookList on_book_select=on_book_select/>
                </PageErrorBoundary>
            </main>
            <Footer/>
        </div>
    }
}
