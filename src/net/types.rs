//! Wire types for the book-club REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A book record as returned by `GET /api/books/`.
///
/// Only `id`, `title`, and `author` are guaranteed by the backend; the
/// remaining fields default when a record omits them, and `cover_image`
/// may be absent, `null`, or blank for books without cover art.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_chapters: u32,
    #[serde(default)]
    pub cover_image: Option<String>,
}
