//! REST API helpers for the book-club backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! into inline UI states without crashing hydration. A rejected call is
//! never rethrown into the render tree; the error boundary only covers
//! render-time faults.

#![allow(clippy::unused_async)]

use super::types::Book;

/// Fetch the full book collection from `GET /api/books/`.
///
/// Issued once per list mount, with no query parameters.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with
/// a non-success status, or the body is not a JSON array of books.
pub async fn fetch_books() -> Result<Vec<Book>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/books/")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("book list request failed: {}", resp.status()));
        }
        resp.json::<Vec<Book>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch a single book from `GET /api/books/{id}/`.
///
/// # Errors
///
/// Returns an error string if the request fails, the book does not exist,
/// or the body is not a book record.
pub async fn fetch_book(id: u64) -> Result<Book, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/books/{id}/");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("book request failed: {}", resp.status()));
        }
        resp.json::<Book>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
