//! Book list: fetches the collection once on mount and renders one card
//! per record.

#[cfg(test)]
#[path = "book_list_test.rs"]
mod book_list_test;

use leptos::prelude::*;

use crate::components::book_card::BookCard;
use crate::state::books::FetchState;

/// Text rendered when the collection comes back empty.
pub const EMPTY_TEXT: &str = "No books found.";

/// The browsable book collection.
///
/// Issues exactly one `GET /api/books/` per mount via a `LocalResource`
/// and classifies the poll through [`FetchState`]. A rejected fetch is
/// handled here as inline degraded text, never rethrown into the render
/// tree. Selecting a card forwards that book's id to `on_book_select`;
/// what happens next (navigation) is the caller's business.
#[component]
pub fn BookList(on_book_select: Callback<u64>) -> impl IntoView {
    let books = LocalResource::new(|| crate::net::api::fetch_books());

    view! {
        <div class="book-list">
            {move || match FetchState::from_poll(books.get()) {
                FetchState::Loading => {
                    view! { <p class="book-list__loading">"Loading books..."</p> }.into_any()
                }
                FetchState::Empty => {
                    view! { <p class="book-list__empty">{EMPTY_TEXT}</p> }.into_any()
                }
                FetchState::Errored(message) => {
                    view! {
                        <p class="book-list__error">
                            {format!("Could not load books: {message}")}
                        </p>
                    }
                        .into_any()
                }
                FetchState::Loaded(list) => {
                    view! {
                        <div class="book-list__cards">
                            {list
                                .into_iter()
                                .map(|book| {
                                    let id = book.id;
                                    view! {
                                        <BookCard
                                            book=book
                                            on_select=Callback::new(move |()| {
                                                on_book_select.run(id);
                                            })
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
