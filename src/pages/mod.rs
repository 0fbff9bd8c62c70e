//! Top-level pages wired into the router.

pub mod book_detail;
pub mod home;
