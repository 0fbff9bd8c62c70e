//! Card for a single book: cover (or placeholder), title, byline, and a
//! details action.

#[cfg(test)]
#[path = "book_card_test.rs"]
mod book_card_test;

use leptos::prelude::*;

use crate::net::types::Book;

/// Placeholder text shown in place of a missing cover image.
pub const NO_COVER_TEXT: &str = "No Cover";

/// Byline shown under the title.
pub fn byline(author: &str) -> String {
    format!("by {author}")
}

/// Cover source for a book, or `None` when the placeholder should render.
///
/// The backend stores covers as an optional text column, so a record can
/// carry `null` or a blank string; both select the placeholder.
pub fn cover_src(book: &Book) -> Option<&str> {
    book.cover_image.as_deref().filter(|src| !src.trim().is_empty())
}

/// A single book in the list. Purely a function of its inputs: no state,
/// no network. `on_select` runs when the details button is clicked.
#[component]
pub fn BookCard(book: Book, on_select: Callback<()>) -> impl IntoView {
    let alt = book.title.clone();
    let cover = match cover_src(&book) {
        Some(src) => {
            let src = src.to_owned();
            view! { <img class="book-card__cover" src=src alt=alt/> }.into_any()
        }
        None => view! {
            <div class="book-card__cover book-card__cover--missing">{NO_COVER_TEXT}</div>
        }
            .into_any(),
    };

    view! {
        <div class="book-card">
            {cover}
            <h3 class="book-card__title">{book.title.clone()}</h3>
            <p class="book-card__byline">{byline(&book.author)}</p>
            <button class="book-card__details" on:click=move |_| on_select.run(())>
                "View Details"
            </button>
        </div>
    }
}
