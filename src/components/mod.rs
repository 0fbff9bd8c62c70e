//! Presentational components shared across pages.

pub mod book_card;
pub mod book_list;
pub mod error_boundary;
pub mod floating_images;
pub mod footer;
