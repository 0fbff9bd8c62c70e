//! Book detail page, the navigation target of card selection.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::book_card::{NO_COVER_TEXT, byline, cover_src};
use crate::components::footer::Footer;

/// Full metadata for one book, fetched by the `:id` route param.
///
/// A bad or unknown id degrades to inline error text; the backend's 404
/// surfaces here the same way a network failure does.
#[component]
pub fn BookDetailPage() -> impl IntoView {
    let params = use_params_map();
    let book = LocalResource::new(move || {
        let id = params.get().get("id").and_then(|raw| raw.parse::<u64>().ok());
        async move {
            match id {
                Some(id) => crate::net::api::fetch_book(id).await,
                None => Err("invalid book id".to_owned()),
            }
        }
    });

    view! {
        <div class="book-detail-page">
            {move || match book.get() {
                None => {
                    view! { <p class="book-detail-page__loading">"Loading book..."</p> }
                        .into_any()
                }
                Some(Err(message)) => {
                    view! {
                        <p class="book-detail-page__error">
                            {format!("Could not load this book: {message}")}
                        </p>
                    }
                        .into_any()
                }
                Some(Ok(book)) => {
                    let cover = match cover_src(&book) {
                        Some(src) => {
                            let src = src.to_owned();
                            let alt = book.title.clone();
                            view! { <img class="book-detail__cover" src=src alt=alt/> }
                                .into_any()
                        }
                        None => view! {
                            <div class="book-detail__cover book-detail__cover--missing">
                                {NO_COVER_TEXT}
                            </div>
                        }
                            .into_any(),
                    };
                    view! {
                        <article class="book-detail">
                            {cover}
                            <h1 class="book-detail__title">{book.title.clone()}</h1>
                            <p class="book-detail__byline">{byline(&book.author)}</p>
                            <p class="book-detail__genre">{book.genre.clone()}</p>
                            <p class="book-detail__description">{book.description.clone()}</p>
                            <p class="book-detail__extent">
                                {format!(
                                    "{} pages · {} chapters",
                                    book.total_pages,
                                    book.total_chapters,
                                )}
                            </p>
                            <a class="book-detail__back" href="/">
                                "Back to all books"
                            </a>
                        </article>
                    }
                        .into_any()
                }
            }}
            <Footer/>
        </div>
    }
}
