#[cfg(test)]
#[path = "books_test.rs"]
mod books_test;

use crate::net::types::Book;

/// Lifecycle of the one collection fetch a book list performs per mount.
///
/// A list is loading until its request resolves, then lands in exactly one
/// of the terminal variants. There is no retry or refetch; the list is a
/// read-only snapshot of the initial response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Loaded(Vec<Book>),
    Empty,
    Errored(String),
}

impl FetchState {
    /// Classify the current poll of a pending fetch.
    ///
    /// `None` means the request has not resolved yet. A resolved empty
    /// collection is distinct from an error; both are terminal. Order of a
    /// loaded collection is the order the server returned.
    pub fn from_poll(poll: Option<Result<Vec<Book>, String>>) -> Self {
        match poll {
            None => Self::Loading,
            Some(Ok(books)) if books.is_empty() => Self::Empty,
            Some(Ok(books)) => Self::Loaded(books),
            Some(Err(message)) => Self::Errored(message),
        }
    }
}
